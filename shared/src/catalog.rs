//! Static price list shown in the budget panel.

/// One plan tier, priced per guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub brands: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOn {
    pub name: &'static str,
    pub description: Option<&'static str>,
    /// `(option, price)` rows; empty when the add-on has a single starting price
    pub options: &'static [(&'static str, &'static str)],
    pub starting_price: Option<&'static str>,
}

pub const GOLD_PLANS: [Plan; 3] = [
    Plan {
        name: "Gold Standart",
        price: "R$50,00",
        brands: &[
            "Vodka Bacco ou Smirnoff",
            "Gin Bacco ou Gordons",
            "Rum Montila",
            "Tequila brasileira",
            "Energetico Baly ou Red Horse*",
        ],
    },
    Plan {
        name: "Gold Plus",
        price: "R$60,00",
        brands: &[
            "Vodka Absolut ou Stolichnaya",
            "Gin Tanqueray ou Bombay",
            "Rum Bacardi",
            "Tequila José Cuervo",
            "Energetico Baly ou Red horse*",
        ],
    },
    Plan {
        name: "Gold Premium",
        price: "R$75,00",
        brands: &[
            "Vodka Grey Goose ou Ciroc",
            "Gin Tanqueray Ten",
            "Rum Havana Club",
            "Tequila El Jimador",
            "Energético Red Bull*",
            "Plus de Soda italiana e vodka com energético",
        ],
    },
];

pub const DIAMOND_PLANS: [Plan; 3] = [
    Plan {
        name: "Diamond Standart",
        price: "R$60,00",
        brands: &[
            "Vodka Bacco ou Smirnoff",
            "Gin Bacco ou Gordons",
            "Rum Montila",
            "Tequila brasileira",
            "Whiskey Jim Beam ou Red Label",
            "Energetico Red Bull*",
        ],
    },
    Plan {
        name: "Diamond Plus",
        price: "R$70,00",
        brands: &[
            "Vodka Absolut ou Stolichnaya",
            "Gin Tanqueray ou Bombay",
            "Rum Bacardi",
            "Tequila José Cuervo",
            "Whiskey Jack Daniels",
            "Energético Red Bull*",
        ],
    },
    Plan {
        name: "Diamond Premium",
        price: "R$85,00",
        brands: &[
            "Vodka Grey Goose ou Ciroc",
            "Gin Tanqueray Ten",
            "Rum Havana Club",
            "Tequila El Jimador",
            "Whiskey Jack Daniels ou Chivas 12",
            "Energético Red Bull*",
            "Plus de Soda italiana e vodka com energético",
        ],
    },
];

pub const ADD_ONS: [AddOn; 3] = [
    AddOn {
        name: "Welcome Drink",
        description: Some("Gelo translúcido personalizado com barman servindo:"),
        options: &[
            ("Clericot", "R$1.500,00"),
            ("Aperol Spritz", "R$2.000,00"),
            ("Lillet Spritz", "R$2.500,00"),
        ],
        starting_price: None,
    },
    AddOn {
        name: "Pistola de Bolha Aromática",
        description: None,
        options: &[],
        starting_price: Some("R$500,00"),
    },
    AddOn {
        name: "Fonte de Bebidas",
        description: None,
        options: &[],
        starting_price: Some("R$800,00"),
    },
];

pub const DISCOUNT_NOTE: &str = "10% OFF fechando dentro de 7 dias";
pub const SERVICE_HOURS: &str = "Até 7 horas de open bar";
pub const PAYMENT_TERMS: &str = "Entrada de R$300,00 e o restante até 1 dia antes do evento.";
pub const UPCOMING_NOTE: &str = "Novidades em breve: Havenas Vodka e Gin, fique ligado!";

pub const INCLUDED: [&str; 8] = [
    "Mão de obra de 2 barmans a cada 50 pessoas.",
    "Todas as bebidas, frutas e insumos.",
    "Balcão para trabalho, se necessário.",
    "Bebidas de alta qualidade.",
    "Gelo e local para armazenamento.",
    "Drinks feitos na hora.",
    "Copos, taças e canequinhas para cada drink.",
    "Drink personalizado com logomarca ou brasão.",
];

pub const IMPORTANT_NOTES: [&str; 6] = [
    "Convidados a partir de 8 anos são contabilizados.",
    "Drinks não alcoólicos sempre disponíveis.",
    "Para eventos fora de Ponta Grossa, consultar deslocamento.",
    "Hora-extra: +12% sobre o valor total.",
    "Com bar, o consumo de outras bebidas reduz de 30% a 40%.",
    "Proposta válida por 7 dias.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tier_has_three_distinct_plans() {
        for plans in [&GOLD_PLANS, &DIAMOND_PLANS] {
            assert_eq!(plans.len(), 3);
            let mut names: Vec<_> = plans.iter().map(|plan| plan.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), 3);
            assert!(plans.iter().all(|plan| plan.price.starts_with("R$")));
            assert!(plans.iter().all(|plan| !plan.brands.is_empty()));
        }
    }

    #[test]
    fn test_diamond_always_adds_whiskey() {
        for plan in DIAMOND_PLANS {
            assert!(plan.brands.iter().any(|brand| brand.starts_with("Whiskey")), "{}", plan.name);
        }
        for plan in GOLD_PLANS {
            assert!(!plan.brands.iter().any(|brand| brand.starts_with("Whiskey")), "{}", plan.name);
        }
    }

    #[test]
    fn test_add_ons_have_a_price() {
        for add_on in ADD_ONS {
            assert!(
                !add_on.options.is_empty() || add_on.starting_price.is_some(),
                "{} has no price",
                add_on.name
            );
        }
    }
}
