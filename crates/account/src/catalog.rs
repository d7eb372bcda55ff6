//! Fixed add-on package catalog.

use crate::error::AccountError;

/// An add-on package that can be bought with account balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub code: &'static str,
    /// Storefront display name.
    pub name: &'static str,
    pub description: &'static str,
    /// Title recorded on the movement created by a purchase.
    pub movement_title: &'static str,
    /// Price in whole currency units.
    pub price: i64,
}

pub const CATALOG: [Package; 3] = [
    Package {
        code: "data_5gb",
        name: "Paquete 5 GB",
        description: "Navegacion adicional para redes, apps y navegacion general.",
        movement_title: "Compra paquete 5GB",
        price: 12_000,
    },
    Package {
        code: "voz_100min",
        name: "Paquete Voz 100 min",
        description: "Minutos adicionales para llamadas nacionales.",
        movement_title: "Compra paquete voz 100 min",
        price: 9_000,
    },
    Package {
        code: "combo_full",
        name: "Paquete Combo Full",
        description: "Combinado de datos y voz para uso intensivo.",
        movement_title: "Compra paquete combo full",
        price: 18_000,
    },
];

/// Look up a package by its exact code.
pub fn find(code: &str) -> Result<&'static Package, AccountError> {
    CATALOG
        .iter()
        .find(|p| p.code == code)
        .ok_or_else(|| AccountError::PackageNotFound { code: code.to_string() })
}
