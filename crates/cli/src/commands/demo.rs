//! Offline store walkthrough.
//!
//! Exercises the whole flow against the fallback catalog: browse, filter,
//! fill a cart, enter customer details, and check out. No network, no
//! server; useful as a smoke test and as living documentation of the API.

use bramsstore_core::{CategoryFilter, Currency, CustomerInfo, PaymentMethod, Price};
use bramsstore_storefront::catalog::filter::{self, CatalogQuery};
use bramsstore_storefront::store::{CatalogSnapshot, Store};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = Store::new(CatalogSnapshot::fallback(
        "demo runs against the built-in catalog".to_owned(),
    ));

    tracing::info!("Catalog loaded: {} products", store.products().len());

    // Browse the audio section
    let query = CatalogQuery {
        category: "audio".parse::<CategoryFilter>()?,
        search: String::new(),
    };
    for product in filter::filter(store.products(), &query) {
        tracing::info!(
            "  audio: {} - {}",
            product.name,
            product.unit_price.format(Currency::Crc)
        );
    }

    // Fill the cart: one phone, two headsets
    let phone = store.products().first().ok_or("empty catalog")?.id.clone();
    let headset = store.products().get(1).ok_or("empty catalog")?.id.clone();
    store.add_to_cart(&phone)?;
    store.add_to_cart(&headset)?;
    store.add_to_cart(&headset)?;

    tracing::info!(
        "Cart: {} items, total {}",
        store.cart().item_count(),
        store.cart().total().format(Currency::Crc)
    );

    // Enter customer details and check out
    store.set_customer(CustomerInfo {
        name: "Cliente Demo".to_owned(),
        email: "demo@bramsstore.example".to_owned(),
        phone: "8888-0000".to_owned(),
        address: "Avenida Central".to_owned(),
        city: "San José".to_owned(),
        postal_code: "10101".to_owned(),
        payment_method: PaymentMethod::Sinpe,
    });

    let confirmation = store.submit_checkout(Price::from_minor_units(2_500), Currency::Crc)?;

    tracing::info!("{}", confirmation.message);
    tracing::info!(
        "Order {}: subtotal {}, shipping {}, total {}",
        confirmation.order_id,
        confirmation.subtotal.format(Currency::Crc),
        confirmation.shipping.format(Currency::Crc),
        confirmation.total.format(Currency::Crc)
    );

    // The store resets itself after a confirmed order
    tracing::info!(
        "Store after checkout: cart items {}, customer name {:?}",
        store.cart().item_count(),
        store.customer().name
    );

    Ok(())
}
