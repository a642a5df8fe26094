// ============================================================================
// Basic Usage Example
// ============================================================================

use faraid_engine::prelude::*;
use std::sync::Arc;

fn print_result(title: &str, estate: f64, result: &InheritanceResult) {
    println!("=== {} (estate {:.2}) ===", title, estate);

    for share in &result.shares {
        println!(
            "  {:<9} x{}  {:>6}  {:>12.2}  ({:.2} each)",
            share.heir.to_string(),
            share.count,
            share.share_fraction.to_string(),
            share.share_amount,
            share.share_per_individual
        );
    }

    println!("  Distributed: {:.2}", result.total_distributed);
    println!("  Unallocated: {:.2}", result.unallocated_amount);
    if let Some(analysis) = &result.analysis {
        println!("  Analysis: {} {:?}", analysis.key(), analysis.params());
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fara'id Engine Example ===\n");

    let calculator = InheritanceCalculatorBuilder::new()
        .with_event_handler(Arc::new(LoggingEventHandler))
        .build()?;

    // Residuary: children share what the fixed heirs leave, two to one
    let family = FamilyComposition::new(Gender::Male)
        .with_spouse(true)
        .with_father(true)
        .with_mother(true)
        .with_sons(1)
        .with_daughters(1);
    let result = calculator.calculate(&family, 120_000.0)?;
    print_result("Wife, parents, son and daughter", 120_000.0, &result);

    // Awwal: fixed shares add up to 9/8 and are scaled down
    let family = family.with_sons(0).with_daughters(2);
    let result = calculator.calculate(&family, 27_000.0)?;
    print_result("Wife, parents and two daughters", 27_000.0, &result);

    // Radd: the surplus goes back to mother and daughter
    let family = FamilyComposition::new(Gender::Female)
        .with_spouse(false)
        .with_father(false)
        .with_mother(true)
        .with_sons(0)
        .with_daughters(1);
    let result = calculator.calculate(&family, 1_200.0)?;
    print_result("Mother and daughter", 1_200.0, &result);

    // Audit trail of a single calculation
    let (_, events) = calculator.calculate_with_events(&family, 1_200.0)?;
    println!("Events generated:");
    for event in &events {
        match event {
            CalculationEvent::FixedSharesResolved { total, .. } => {
                println!("  Fixed shares total {}", total);
            },
            CalculationEvent::SurplusReturned { surplus, .. } => {
                println!("  Surplus {} returned", surplus);
            },
            CalculationEvent::CalculationCompleted {
                calculation_id,
                total_distributed,
                ..
            } => {
                println!(
                    "  Calculation {} completed, {:.2} distributed",
                    calculation_id.as_uuid(),
                    total_distributed
                );
            },
            _ => {},
        }
    }

    Ok(())
}
