/// quick start - minimal example to get started
use loan_calculator::{AccrualEngine, CalculationSpec, CalculationStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a $10,000 loan over january at 5% base plus 2% margin
    let spec = CalculationSpec::builder()
        .start_date("2024-01-01")
        .end_date("2024-01-31")
        .amount(10_000.0)
        .currency("USD")
        .base_rate(5.0)
        .margin(2.0)
        .build()?;

    // save it
    let mut store = CalculationStore::new();
    let id = store.insert(spec.clone(), None);

    // compute the ledger
    let engine = AccrualEngine::new();
    let ledger = engine.daily_ledger(&spec)?;

    println!("calculation {id}: {} days accrued", ledger.len());
    for record in ledger.iter().take(3) {
        println!(
            "  {}  {:.4}  {:.4}  day {}",
            record.date_string(),
            record.interest_no_margin,
            record.interest_with_margin,
            record.days_elapsed
        );
    }
    println!("total with margin: {:.2} {}", engine.total_interest(&spec, true)?, spec.currency);

    Ok(())
}
