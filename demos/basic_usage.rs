// ============================================================================
// Basic Usage Example
// ============================================================================

use fraction_core::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fraction Example ===\n");

    let half = Fraction::new(1, 2)?;
    let third = Fraction::new(1, 3)?;
    println!("half = {}, third = {}", half, third);

    // Value operators return new fractions
    println!("\n=== Arithmetic ===");
    println!("half + third = {}", half + third);
    println!("half - third = {}", half - third);
    println!("half * third = {}", half * third);
    println!("half / third = {}", half / third);
    println!("1 - third    = {}", 1i64 - third);
    println!("third ^ -2   = {}", third.checked_pow(-2)?);

    // Compound forms mutate in place and keep every term unreduced
    println!("\n=== Accumulation ===");
    let mut total = Fraction::ZERO;
    for d in 1..=4i64 {
        total.checked_add_assign(Fraction::new(1, d)?)?;
        println!("  after 1/{}: {} ~ {:.6}", d, total, total.to_real());
    }

    println!("\n=== Comparison ===");
    println!("half < third: {}", half < third);
    println!("half == 0.5:  {}", half == 0.5);
    println!("total > 2:    {}", total > 2i64);

    println!("\n=== Conversions ===");
    let (numerator, denominator): (i64, i64) = total.into();
    println!("parts: {} / {}", numerator, denominator);
    println!("integer part: {}", total.to_integer()?);
    println!("decimal: {}", total.to_decimal()?);
    println!("plain: {}", total.display_with(&FormatConfig::plain()));
    let ratio = FormatConfig::plain().with_separator(':');
    match total.try_display_with(&ratio) {
        Ok(shown) => println!("ratio: {}", shown),
        Err(e) => println!("invalid format: {}", e),
    }

    println!("\n=== Errors ===");
    match Fraction::new(5, 0) {
        Ok(f) => println!("unexpected: {}", f),
        Err(e) => println!("Fraction::new(5, 0): {}", e),
    }
    match Fraction::try_new(1.5, 2) {
        Ok(f) => println!("unexpected: {}", f),
        Err(e) => println!("Fraction::try_new(1.5, 2): {}", e),
    }
    match half.checked_div(Fraction::new(0, 5)?) {
        Ok(f) => println!("unexpected: {}", f),
        Err(e) => println!("half / (0/5): {}", e),
    }

    Ok(())
}
