/// json report - serialized ledgers for debugging and export
use loan_calculator::{AccrualEngine, CalculationSpec, CalculationStore, LedgerReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json ledger reports ===\n");

    let engine = AccrualEngine::new();
    let mut store = CalculationStore::new();

    // simple interest, business days only
    let simple = CalculationSpec::builder()
        .start_date("2024-01-01")
        .end_date("2024-01-10")
        .amount(50_000.0)
        .currency("EUR")
        .base_rate(3.5)
        .margin(1.25)
        .exclude_weekends(true)
        .build()?;
    let simple_id = store.insert(simple, None);

    // same loan compounding daily over every calendar day
    let compound = CalculationSpec::builder()
        .start_date("2024-01-01")
        .end_date("2024-01-10")
        .amount(50_000.0)
        .currency("EUR")
        .base_rate(3.5)
        .margin(1.25)
        .method("compound")
        .build()?;
    let compound_id = store.insert(compound, None);

    for (id, spec) in store.list() {
        let records = engine.daily_ledger(spec)?;
        let report = LedgerReport::from_records(Some(id), spec, &records);

        println!("calculation {id} ({})", spec.method);
        println!("------------------------");
        println!("{}\n", report.json());
    }

    // overwrite the first entry in place
    let revised = CalculationSpec::builder()
        .start_date("2024-01-01")
        .end_date("2024-01-31")
        .amount(50_000.0)
        .currency("EUR")
        .base_rate(4.0)
        .margin(1.25)
        .build()?;
    store.insert(revised, Some(simple_id));

    if let Some(spec) = store.get(simple_id) {
        let report = LedgerReport::compute(&engine, spec)?;
        println!("calculation {simple_id} after update:");
        println!("{}", serde_json::to_string_pretty(&report.summary)?);
    }
    println!("next id stays at {}", store.next_id());
    assert_eq!(store.next_id(), compound_id + 1);

    Ok(())
}
