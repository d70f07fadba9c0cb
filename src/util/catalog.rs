//! Static option catalogs for filter and form selects.
//!
//! The backend also serves a municipality list; pages use it when available
//! and fall back to these catalogs, which match the region the marketplace
//! launched in.

use crate::net::types::Municipality;

/// A `value`/`label` pair for a `<select>` option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Municipalities covered by the marketplace.
pub const MUNICIPALITIES: &[SelectOption] = &[
    SelectOption { value: "uriangato", label: "Uriangato" },
    SelectOption { value: "moroleon", label: "Moroleón" },
    SelectOption { value: "yuriria", label: "Yuriria" },
    SelectOption { value: "cuitzeo", label: "Cuitzeo" },
];

/// Commercial categories for businesses and offer filtering.
pub const BUSINESS_TYPES: &[SelectOption] = &[
    SelectOption { value: "ropa", label: "Ropa y Textiles" },
    SelectOption { value: "calzado", label: "Calzado" },
    SelectOption { value: "alimentos", label: "Alimentos y Bebidas" },
    SelectOption { value: "abarrotes", label: "Abarrotes" },
    SelectOption { value: "artesanias", label: "Artesanías" },
    SelectOption { value: "servicios", label: "Servicios" },
    SelectOption { value: "otro", label: "Otro" },
];

/// Kinds of premises a business can register.
pub const LOCATION_TYPES: &[SelectOption] = &[
    SelectOption { value: "local_comercial", label: "Local comercial" },
    SelectOption { value: "puesto_fijo", label: "Puesto fijo en mercado" },
    SelectOption { value: "ambulante", label: "Vendedor ambulante" },
    SelectOption { value: "en_linea", label: "Solo en línea" },
];

/// Convert backend municipalities into select options, falling back to the
/// static catalog when the list is empty.
pub fn municipality_options(remote: &[Municipality]) -> Vec<(String, String)> {
    if remote.is_empty() {
        return MUNICIPALITIES
            .iter()
            .map(|opt| (opt.value.to_owned(), opt.label.to_owned()))
            .collect();
    }
    remote
        .iter()
        .map(|m| (m.value.clone(), m.label.clone()))
        .collect()
}
