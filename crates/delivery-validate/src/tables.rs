//! Fixed vocabularies consulted by the category, state and phone rules.
//!
//! The lists are part of the validation contract: a value is accepted only
//! if it appears here verbatim (after the owning rule's normalization).
//! Lookup sets are built once on first use and never change afterwards.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Restaurant cuisine/category names.
pub const RESTAURANT_CATEGORIES: &[&str] = &[
    "Brasileira",
    "Italiana",
    "Japonesa",
    "Chinesa",
    "Americana",
    "Mexicana",
    "Indiana",
    "Árabe",
    "Francesa",
    "Tailandesa",
    "Coreana",
    "Grega",
    "Peruana",
    "Argentina",
    "Alemã",
    "Portuguesa",
    "Espanhola",
    "Vegetariana",
    "Vegana",
    "Orgânica",
    "Fast Food",
    "Contemporânea",
    "Fusion",
    "Mediterrânea",
    "Churrascaria",
    "Pizzaria",
    "Hamburgueria",
    "Sorveteria",
    "Padaria",
    "Lanchonete",
    "Cafeteria",
    "Bar",
    "Confeitaria",
    "Açaíteria",
];

/// Product category names.
pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Pizza",
    "Hambúrguer",
    "Sushi",
    "Bebida",
    "Sobremesa",
    "Lanche",
    "Prato Principal",
    "Entrada",
    "Salada",
    "Sanduíche",
    "Pastel",
    "Coxinha",
    "Esfiha",
    "Tapioca",
    "Açaí",
    "Vitamina",
    "Suco",
    "Refrigerante",
    "Água",
    "Cerveja",
    "Vinho",
    "Drink",
    "Café",
    "Chá",
    "Chocolate Quente",
    "Milkshake",
    "Sorvete",
    "Bolo",
    "Torta",
    "Pudim",
    "Mousse",
    "Brigadeiro",
    "Bombom",
    "Doce",
    "Salgado",
    "Petisco",
    "Porção",
    "Combo",
    "Promoção",
];

/// Brazilian federative units (26 states plus the Federal District).
pub const STATE_CODES: &[&str] = &[
    "AC", // Acre
    "AL", // Alagoas
    "AP", // Amapá
    "AM", // Amazonas
    "BA", // Bahia
    "CE", // Ceará
    "DF", // Distrito Federal
    "ES", // Espírito Santo
    "GO", // Goiás
    "MA", // Maranhão
    "MT", // Mato Grosso
    "MS", // Mato Grosso do Sul
    "MG", // Minas Gerais
    "PA", // Pará
    "PB", // Paraíba
    "PR", // Paraná
    "PE", // Pernambuco
    "PI", // Piauí
    "RJ", // Rio de Janeiro
    "RN", // Rio Grande do Norte
    "RS", // Rio Grande do Sul
    "RO", // Rondônia
    "RR", // Roraima
    "SC", // Santa Catarina
    "SP", // São Paulo
    "SE", // Sergipe
    "TO", // Tocantins
];

/// Brazilian telephone area codes (DDD), grouped by state.
#[rustfmt::skip]
pub const AREA_CODES: &[&str] = &[
    "11", "12", "13", "14", "15", "16", "17", "18", "19", // SP
    "21", "22", "24",                                     // RJ
    "27", "28",                                           // ES
    "31", "32", "33", "34", "35", "37", "38",             // MG
    "41", "42", "43", "44", "45", "46",                   // PR
    "47", "48", "49",                                     // SC
    "51", "53", "54", "55",                               // RS
    "61",                                                 // DF
    "62", "64",                                           // GO
    "63",                                                 // TO
    "65", "66",                                           // MT
    "67",                                                 // MS
    "68",                                                 // AC
    "69",                                                 // RO
    "71", "73", "74", "75", "77",                         // BA
    "79",                                                 // SE
    "81", "87",                                           // PE
    "82",                                                 // AL
    "83",                                                 // PB
    "84",                                                 // RN
    "85", "88",                                           // CE
    "86", "89",                                           // PI
    "91", "93", "94",                                     // PA
    "92", "97",                                           // AM
    "95",                                                 // RR
    "96",                                                 // AP
    "98", "99",                                           // MA
];

static RESTAURANT_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static PRODUCT_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static ALL_CATEGORIES_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static STATE_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static AREA_CODE_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

pub fn restaurant_categories() -> &'static HashSet<&'static str> {
    RESTAURANT_SET.get_or_init(|| RESTAURANT_CATEGORIES.iter().copied().collect())
}

pub fn product_categories() -> &'static HashSet<&'static str> {
    PRODUCT_SET.get_or_init(|| PRODUCT_CATEGORIES.iter().copied().collect())
}

/// Union of restaurant and product categories.
pub fn all_categories() -> &'static HashSet<&'static str> {
    ALL_CATEGORIES_SET.get_or_init(|| {
        RESTAURANT_CATEGORIES
            .iter()
            .chain(PRODUCT_CATEGORIES)
            .copied()
            .collect()
    })
}

pub fn state_codes() -> &'static HashSet<&'static str> {
    STATE_SET.get_or_init(|| STATE_CODES.iter().copied().collect())
}

pub fn area_codes() -> &'static HashSet<&'static str> {
    AREA_CODE_SET.get_or_init(|| AREA_CODES.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(restaurant_categories().len(), 34);
        assert_eq!(product_categories().len(), 39);
        assert_eq!(state_codes().len(), 27);
        assert_eq!(area_codes().len(), 67);
    }

    #[test]
    fn tables_have_no_duplicates() {
        assert_eq!(restaurant_categories().len(), RESTAURANT_CATEGORIES.len());
        assert_eq!(product_categories().len(), PRODUCT_CATEGORIES.len());
        assert_eq!(state_codes().len(), STATE_CODES.len());
        assert_eq!(area_codes().len(), AREA_CODES.len());
    }

    #[test]
    fn general_set_is_union() {
        assert_eq!(all_categories().len(), 34 + 39);
        assert!(all_categories().contains("Pizzaria"));
        assert!(all_categories().contains("Pizza"));
    }

    #[test]
    fn area_codes_are_two_digits() {
        for ddd in AREA_CODES {
            assert_eq!(ddd.len(), 2);
            assert!(ddd.chars().all(|c| c.is_ascii_digit()));
        }
        assert!(!area_codes().contains("00"));
        assert!(!area_codes().contains("20"));
        assert!(!area_codes().contains("23"));
    }
}
