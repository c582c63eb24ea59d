//! Print-based demo of the product inventory manager.
//!
//! Runs a fixed sequence against `products.db` in the working directory:
//! seeds three products, queries them back, updates one, then lists all.

use anyhow::Result;

use inventory_sqlite::{products_config, ProductManager, ProductUpdate};

fn main() -> Result<()> {
    env_logger::init();

    let manager = ProductManager::open(products_config("products.db"))?;

    let apple_id = seed(&manager, "Apple", 5.50, Some("Fruit"), 100);
    let banana_id = seed(&manager, "Banana", 3.25, Some("Fruit"), 150);
    seed(&manager, "Laptop", 1000.00, Some("Electronics"), 10);

    println!("Product by id:");
    if let Some(id) = apple_id {
        match manager.product_by_id(id)? {
            Some(product) => println!("{:?}", product),
            None => println!("no product with id {}", id),
        }
    }

    println!("\nFruit products:");
    for product in manager.products_by_category("Fruit")? {
        println!("{:?}", product);
    }

    if let Some(id) = banana_id {
        let affected =
            manager.update_product(id, ProductUpdate::new().with_price(4.00).with_stock(200))?;
        log::info!("updated {} row(s) for id {}", affected, id);
    }

    println!("\nAll products:");
    for product in manager.list_all()? {
        println!("{:?}", product);
    }

    manager.close()?;
    Ok(())
}

/// Insert one product, logging and skipping on failure.
fn seed(
    manager: &ProductManager,
    name: &str,
    price: f64,
    category: Option<&str>,
    stock: i64,
) -> Option<i64> {
    match manager.add_product(name, price, category, stock) {
        Ok(id) => Some(id),
        Err(err) => {
            log::error!("failed to add {}: {}", name, err);
            None
        }
    }
}
