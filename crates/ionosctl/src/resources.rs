//! Column schemas for the supported resource types.

use clap::ValueEnum;
use ionosctl_printer::Column;
use serde_json::{Map, Value};

/// Resource types `ionosctl` knows how to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Datacenter,
    Server,
    DnsZone,
    DbaasPostgresCluster,
    ApigatewayGateway,
}

impl Resource {
    /// Name used on the command line and as the config file key.
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Datacenter => "datacenter",
            Resource::Server => "server",
            Resource::DnsZone => "dns-zone",
            Resource::DbaasPostgresCluster => "dbaas-postgres-cluster",
            Resource::ApigatewayGateway => "apigateway-gateway",
        }
    }

    pub fn schema(&self) -> Vec<Column> {
        match self {
            Resource::Datacenter => datacenter_cols(),
            Resource::Server => server_cols(),
            Resource::DnsZone => dns_zone_cols(),
            Resource::DbaasPostgresCluster => postgres_cluster_cols(),
            Resource::ApigatewayGateway => gateway_cols(),
        }
    }
}

fn datacenter_cols() -> Vec<Column> {
    vec![
        Column::new("DatacenterId").path("id").by_default(),
        Column::new("Name").path("properties.name").by_default(),
        Column::new("Location").path("properties.location").by_default(),
        Column::new("Description").path("properties.description"),
        Column::new("Version").path("properties.version"),
        Column::new("Features").path("properties.features"),
        Column::new("CpuFamily")
            .derive(|item| collect_field(item, "cpuArchitecture", "cpuFamily"))
            .by_default(),
        Column::new("SecAuthProtection").path("properties.secAuthProtection"),
        Column::new("IPv6CidrBlock").path("properties.ipv6CidrBlock"),
        Column::new("State").path("metadata.state").by_default(),
    ]
}

fn server_cols() -> Vec<Column> {
    vec![
        Column::new("ServerId").path("id").by_default(),
        Column::new("DatacenterId").path("href"),
        Column::new("Name").path("properties.name").by_default(),
        Column::new("Type").path("properties.type").by_default(),
        Column::new("AvailabilityZone").path("properties.availabilityZone"),
        Column::new("Cores").path("properties.cores").by_default(),
        Column::new("Ram")
            .derive(|item| {
                let ram = item.get("properties")?.get("ram")?.as_f64()?;
                Some(Value::from(format!("{} MB", ram)))
            })
            .by_default(),
        Column::new("CpuFamily").path("properties.cpuFamily").by_default(),
        Column::new("VmState").path("properties.vmState").by_default(),
        Column::new("State").path("metadata.state").by_default(),
        Column::new("TemplateId").path("properties.templateUuid"),
        Column::new("BootVolumeId").path("properties.bootVolume.id"),
        Column::new("BootCdromId").path("properties.bootCdrom.id"),
        Column::new("Href").path("href"),
    ]
}

fn dns_zone_cols() -> Vec<Column> {
    vec![
        Column::new("Id").path("id").by_default(),
        Column::new("Name").path("properties.zoneName").by_default(),
        Column::new("Description").path("properties.description").by_default(),
        Column::new("NameServers").path("metadata.nameservers").by_default(),
        Column::new("Enabled").path("properties.enabled").by_default(),
        Column::new("State").path("metadata.state").by_default(),
    ]
}

fn postgres_cluster_cols() -> Vec<Column> {
    vec![
        Column::new("ClusterId").path("id").by_default(),
        Column::new("DisplayName").path("properties.displayName").by_default(),
        Column::new("Location").path("properties.location").by_default(),
        Column::new("DatacenterId")
            .path("properties.connections.0.datacenterId")
            .by_default(),
        Column::new("LanId").path("properties.connections.0.lanId"),
        Column::new("Cidr").path("properties.connections.0.cidr"),
        Column::new("PostgresVersion")
            .path("properties.postgresVersion")
            .by_default(),
        Column::new("Instances").path("properties.instances").by_default(),
        Column::new("Cores").path("properties.cores"),
        Column::new("Ram").path("properties.ram"),
        Column::new("StorageSize").path("properties.storageSize"),
        Column::new("StorageType").path("properties.storageType"),
        Column::new("MaintenanceWindow")
            .derive(maintenance_window)
            .by_default(),
        Column::new("SynchronizationMode").path("properties.synchronizationMode"),
        Column::new("BackupLocation").path("properties.backupLocation"),
        Column::new("State").path("metadata.state").by_default(),
    ]
}

fn gateway_cols() -> Vec<Column> {
    vec![
        Column::new("Id").path("id").by_default(),
        Column::new("Name").path("properties.name").by_default(),
        Column::new("Logs").path("properties.logs").by_default(),
        Column::new("Metrics").path("properties.metrics").by_default(),
        Column::new("CustomDomains")
            .derive(|item| collect_field(item, "customDomains", "name"))
            .by_default(),
        Column::new("PublicEndpoint")
            .path("metadata.publicEndpoint")
            .by_default(),
        Column::new("State").path("metadata.status").by_default(),
    ]
}

/// `"<day> <time>"` from `properties.maintenanceWindow`.
fn maintenance_window(item: &Map<String, Value>) -> Option<Value> {
    let window = item.get("properties")?.get("maintenanceWindow")?;
    let day = window.get("dayOfTheWeek")?.as_str()?;
    let time = window.get("time")?.as_str()?;
    Some(Value::from(format!("{} {}", day, time)))
}

/// Collects `field` from every object in the `properties.<list>` array.
fn collect_field(item: &Map<String, Value>, list: &str, field: &str) -> Option<Value> {
    let entries = item.get("properties")?.get(list)?.as_array()?;
    Some(Value::Array(
        entries
            .iter()
            .filter_map(|entry| entry.get(field).cloned())
            .collect(),
    ))
}
