//! Walks the warehouse end to end: seed both repositories, list their
//! contents, then drive the three rejection paths without aborting.

use stockroom_catalog::{ElectronicItem, GroceryItem};
use stockroom_core::{InventoryItem, ItemId};
use stockroom_warehouse::WarehouseManager;

fn main() {
    stockroom_observability::init();

    let mut manager = WarehouseManager::new();
    manager.seed();

    println!("Grocery items:");
    print_sorted(manager.list_all::<GroceryItem>());

    println!();
    println!("Electronic items:");
    print_sorted(manager.list_all::<ElectronicItem>());

    println!();
    println!("Rejected operations:");

    // Identity 1 is already taken by the seeded laptop.
    let tablet = ElectronicItem::new(ItemId::new(1), "Tablet", 3, "Samsung", 12);
    if let Err(err) = manager.electronics_mut().insert(tablet) {
        println!("  insert: {err}");
    }

    let removed = manager.remove_by_id::<GroceryItem>(ItemId::new(999));
    println!("  remove id 999 applied: {removed}");

    if let Err(err) = manager.groceries_mut().set_quantity(ItemId::new(101), -5) {
        println!("  set quantity: {err}");
    }
}

/// Prints one line per item, sorted by id so runs are comparable.
fn print_sorted<T: InventoryItem>(mut items: Vec<T>) {
    items.sort_by_key(|item| item.id());
    for item in &items {
        println!("{item}");
    }
}
