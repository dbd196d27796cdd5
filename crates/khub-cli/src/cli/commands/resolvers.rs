//! `khub resolvers` – show registries and resolver order.

use khub_core::Registries;

/// Print each registry with its resolvers, first-tried first.
pub fn run_resolvers(registries: &Registries) {
    for (name, impls) in registries.describe() {
        let order: Vec<&str> = impls.into_iter().rev().collect();
        if order.is_empty() {
            println!("{:<24} (none)", name);
        } else {
            println!("{:<24} {}", name, order.join(" -> "));
        }
    }
}
