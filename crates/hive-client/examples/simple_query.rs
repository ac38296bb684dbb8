//! Connects to a local Hive deployment, runs a query and lists the
//! tables in the `default` database.
//!
//! ```sh
//! cargo run --example simple_query
//! ```

use hive_client::{Endpoint, HiveConfig, HiveConnection, HiveResult};

fn main() -> HiveResult<()> {
    tracing_subscriber::fmt::init();

    let config = HiveConfig::new(
        "thrift://localhost:10000".parse::<Endpoint>()?,
        "thrift://localhost:9083".parse::<Endpoint>()?,
    );
    let mut hive = HiveConnection::connect(&config)?;

    hive.execute("SHOW TABLES")?;
    for row in hive.fetch_all()? {
        println!("{row:?}");
    }

    for name in hive.get_all_tables("default")? {
        let table = hive.get_table("default", &name)?;
        println!(
            "{name}: type={} location={}",
            table.table_type.as_deref().unwrap_or("?"),
            table
                .sd
                .as_ref()
                .and_then(|sd| sd.location.as_deref())
                .unwrap_or("?"),
        );
    }

    Ok(())
}
