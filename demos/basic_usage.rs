// ============================================================================
// Basic Usage Example
// ============================================================================

use precise_interp::numeric::{add, checked_divide, divide, multiply, pow, subtract};
use precise_interp::prelude::*;

fn main() {
    println!("=== Precise Interp Example ===\n");

    // Plain f64 arithmetic leaks binary rounding artifacts
    println!("Plain f64:    0.1 + 0.2 = {}", 0.1 + 0.2);
    println!("Corrected:    add(0.1, 0.2) = {}\n", add(&[0.1, 0.2]));

    // N-ary operations fold left to right
    println!("subtract(10, 3, 2) = {}", subtract(&[10.0, 3.0, 2.0]));
    println!("multiply(-2, 2, -2) = {}", multiply(&[-2.0, 2.0, -2.0]));
    println!("divide(2, 3) = {}", divide(&[2.0, 3.0]));

    // pow evaluates a right-associative exponent tower
    println!("pow(2, 2, 2) = 2^(2^2) = {}\n", pow(&[2.0, 2.0, 2.0]));

    // Checked variants reject bad input instead of propagating NaN
    match checked_divide(&[1.0, 0.0]) {
        Ok(v) => println!("checked_divide(1, 0) = {}", v),
        Err(e) => println!("checked_divide(1, 0) rejected: {}", e),
    }

    // Linear interpolation between points
    println!("\nSampling a line from (0, 0) to (10, 5):");
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 5.0);
    for i in 0..=4 {
        let t = f64::from(i) / 4.0;
        println!("  t={:.2} -> {}", t, lerp_point(a, b, t));
    }

    // Quarter-circle approximation with the kappa control offset
    println!("\nSampling a cubic Bezier quarter arc (kappa = {}):", KAPPA);
    let p0 = Point::new(0.0, 0.0);
    let c0 = Point::new(0.0, KAPPA);
    let c1 = Point::new(1.0 - KAPPA, 1.0);
    let p1 = Point::new(1.0, 1.0);
    for i in 0..=4 {
        let t = f64::from(i) / 4.0;
        let s = cbez_point(p0, c0, c1, p1, t);
        println!("  t={:.2} -> {} (radius {})", t, s, s.radius());
    }
}
