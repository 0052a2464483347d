//! Demonstration driver: walks through every public operation of the
//! complex-number core and prints the results.

use complexcalc_core::Complex;

fn main() {
    println!("--- complexcalc demo ---");

    let c1 = Complex::new(3.0, 4.0);
    let c2 = Complex::new(1.0, -2.0);
    let c3 = Complex::from_real(5.0);
    let c4 = Complex::new(0.0, 7.0);

    println!("\n--- Formatting ---");
    println!("c1 = {}", c1);
    println!("c2 = {}", c2);
    println!("c3 = {}", c3);
    println!("c4 = {}", c4);

    println!("\n--- Arithmetic ---");
    println!("({}) + ({}) = {}", c1, c2, c1 + c2);
    println!("({}) - ({}) = {}", c1, c2, c1 - c2);
    println!("({}) * ({}) = {}", c1, c2, c1 * c2);
    match c1.try_div(c2) {
        Ok(q) => println!("({}) / ({}) = {}", c1, c2, q),
        Err(e) => println!("({}) / ({}) failed: {}", c1, c2, e),
    }

    println!("\n--- Conjugate and polar form ---");
    println!("conj({}) = {}", c1, c1.conj());
    println!("|{}| = {}", c1, c1.norm());
    println!("arg({}) = {} rad", c1, c1.arg());

    println!("\n--- Power and principal root ---");
    println!("({})^2 = {}", c1, c1.powf(2.0));
    match c1.nth_root(2) {
        Ok(r) => println!("2nd root of ({}) = {}", c1, r),
        Err(e) => println!("2nd root of ({}) failed: {}", c1, e),
    }

    println!("\n--- Error handling ---");
    match c1.try_div(Complex::ZERO) {
        Ok(q) => println!("({}) / (0) = {}", c1, q),
        Err(e) => println!("({}) / (0) rejected: {}", c1, e),
    }
    match c1.nth_root(-3) {
        Ok(r) => println!("-3rd root of ({}) = {}", c1, r),
        Err(e) => println!("-3rd root of ({}) rejected: {}", c1, e),
    }
}
