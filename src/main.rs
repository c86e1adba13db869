use anyhow::Context;
use log::info;
use partsdb::RecordStore;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "partsdb.dat".to_string());
    let store = RecordStore::open(&path).with_context(|| format!("Failed to open {path}"))?;

    let id = store
        .append("book", "note book", 4, 1500)
        .context("Failed to append part")?;
    info!("Appended record {}", id.index());

    let count = store.record_count().context("Failed to count records")?;
    println!("{} holds {} records", store.path().display(), count);
    for (index, part) in store.records()?.enumerate() {
        let part = part.with_context(|| format!("Failed to read record {index}"))?;
        println!(
            "{:>4}  {:<20}  {:<30}  {:>6}  {:>8}",
            index,
            part.part_number(),
            part.description(),
            part.quantity(),
            part.unit_cost()
        );
    }

    store.close();
    Ok(())
}
