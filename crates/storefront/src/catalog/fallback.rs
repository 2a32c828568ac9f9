//! The built-in fallback catalog.
//!
//! Used whenever the remote catalog source is unreachable, answers with a
//! non-success status, returns a malformed payload, or returns no products.
//! Prices are in colones (minor units).

use bramsstore_core::{Category, Price, Product, ProductId};

/// The hardcoded fallback product list.
#[must_use]
pub fn catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "NovaPhone X5".to_owned(),
            description: "Teléfono inteligente con pantalla AMOLED de 6.5\" y 128 GB".to_owned(),
            unit_price: Price::from_minor_units(650_000),
            stock: 12,
            category: Category::Smartphones,
            featured: true,
            image: "https://raw.githubusercontent.com/Lex-Salas/bramsstore-data/main/images/novaphone-x5.jpg".to_owned(),
        },
        Product {
            id: ProductId::new("2"),
            name: "Auriculares Brams BT".to_owned(),
            description: "Auriculares inalámbricos con cancelación de ruido".to_owned(),
            unit_price: Price::from_minor_units(125_000),
            stock: 30,
            category: Category::Audio,
            featured: true,
            image: "https://raw.githubusercontent.com/Lex-Salas/bramsstore-data/main/images/auriculares-bt.jpg".to_owned(),
        },
        Product {
            id: ProductId::new("3"),
            name: "Portátil Vega 14".to_owned(),
            description: "Portátil liviano de 14\", 16 GB RAM y 512 GB SSD".to_owned(),
            unit_price: Price::from_minor_units(1_450_000),
            stock: 5,
            category: Category::Laptops,
            featured: false,
            image: "https://raw.githubusercontent.com/Lex-Salas/bramsstore-data/main/images/vega-14.jpg".to_owned(),
        },
        Product {
            id: ProductId::new("4"),
            name: "Reloj Pulse S".to_owned(),
            description: "Reloj inteligente con monitor de ritmo cardíaco y GPS".to_owned(),
            unit_price: Price::from_minor_units(210_000),
            stock: 18,
            category: Category::Wearables,
            featured: false,
            image: "https://raw.githubusercontent.com/Lex-Salas/bramsstore-data/main/images/pulse-s.jpg".to_owned(),
        },
        Product {
            id: ProductId::new("5"),
            name: "Control Inalámbrico Neo".to_owned(),
            description: "Control para consola y PC con vibración háptica".to_owned(),
            unit_price: Price::from_minor_units(85_000),
            stock: 25,
            category: Category::Gaming,
            featured: false,
            image: "https://raw.githubusercontent.com/Lex-Salas/bramsstore-data/main/images/control-neo.jpg".to_owned(),
        },
        Product {
            id: ProductId::new("6"),
            name: "Cargador Rápido 65W".to_owned(),
            description: "Cargador USB-C de carga rápida con cable incluido".to_owned(),
            unit_price: Price::from_minor_units(32_000),
            stock: 60,
            category: Category::Accessories,
            featured: false,
            image: "https://raw.githubusercontent.com/Lex-Salas/bramsstore-data/main/images/cargador-65w.jpg".to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_never_empty() {
        assert!(!catalog().is_empty());
    }

    #[test]
    fn test_fallback_ids_are_unique() {
        let products = catalog();
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_fallback_prices_are_positive() {
        assert!(catalog().iter().all(|p| p.unit_price.minor_units() > 0));
    }
}
