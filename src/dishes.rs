//! Dish catalog - the authoritative in-process menu data

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Menu languages. `Es` is the fallback every dish carries a description for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Es,
    En,
    De,
    Fr,
}

/// Closed set of menu category tags, kebab-case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Starters,
    Main,
    Grill,
    Dessert,
    DrinksSoft,
    DrinksBeer,
    DrinksWater,
    DrinksCoffee,
    DrinksLiquor,
    DrinksWine,
}

/// The five price columns shared with the sheet, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceField {
    Price,
    PriceShot,
    PriceGlass,
    PriceHalf,
    PriceWhole,
}

impl PriceField {
    pub const ALL: [PriceField; 5] = [
        PriceField::Price,
        PriceField::PriceShot,
        PriceField::PriceGlass,
        PriceField::PriceHalf,
        PriceField::PriceWhole,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::Price => "price",
            PriceField::PriceShot => "priceShot",
            PriceField::PriceGlass => "priceGlass",
            PriceField::PriceHalf => "priceHalf",
            PriceField::PriceWhole => "priceWhole",
        }
    }
}

/// A single menu item. `id` is the stable join key with the price sheet.
///
/// The five price fields are conceptually exclusive shapes (single price,
/// shot/glass pair, half/whole pair) kept flat because the sheet speaks the
/// flat shape. Absent means "price not yet known / not applicable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub description: HashMap<Lang, String>,
    pub img: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_shot: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_glass: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_half: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_whole: Option<f64>,
}

impl Dish {
    pub fn new(id: &str, category: Category, name: &str, img: &str) -> Self {
        Self {
            id: id.to_string(),
            category,
            name: name.to_string(),
            description: HashMap::new(),
            img: img.to_string(),
            price: None,
            price_shot: None,
            price_glass: None,
            price_half: None,
            price_whole: None,
        }
    }

    pub fn with_desc(mut self, lang: Lang, text: &str) -> Self {
        self.description.insert(lang, text.to_string());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_shot_glass(mut self, shot: Option<f64>, glass: Option<f64>) -> Self {
        self.price_shot = shot;
        self.price_glass = glass;
        self
    }

    pub fn with_half_whole(mut self, half: Option<f64>, whole: Option<f64>) -> Self {
        self.price_half = half;
        self.price_whole = whole;
        self
    }

    pub fn price_field(&self, field: PriceField) -> Option<f64> {
        match field {
            PriceField::Price => self.price,
            PriceField::PriceShot => self.price_shot,
            PriceField::PriceGlass => self.price_glass,
            PriceField::PriceHalf => self.price_half,
            PriceField::PriceWhole => self.price_whole,
        }
    }

    pub fn set_price_field(&mut self, field: PriceField, value: f64) {
        match field {
            PriceField::Price => self.price = Some(value),
            PriceField::PriceShot => self.price_shot = Some(value),
            PriceField::PriceGlass => self.price_glass = Some(value),
            PriceField::PriceHalf => self.price_half = Some(value),
            PriceField::PriceWhole => self.price_whole = Some(value),
        }
    }
}

lazy_static! {
    /// The seed catalog. Read-only after initialization; price corrections
    /// come in through the sheet pipeline, never by editing this in place.
    pub static ref DISHES: Vec<Dish> = seed_dishes();
}

fn seed_dishes() -> Vec<Dish> {
    vec![
        // Entrantes
        Dish::new("ensalada-mixta", Category::Starters, "Ensalada mixta", "img/ensalada-mixta.webp")
            .with_desc(Lang::Es, "Lechuga, tomate, cebolla, atún y aceitunas.")
            .with_desc(Lang::En, "Lettuce, tomato, onion, tuna and olives.")
            .with_desc(Lang::De, "Salat, Tomate, Zwiebel, Thunfisch und Oliven.")
            .with_desc(Lang::Fr, "Laitue, tomate, oignon, thon et olives.")
            .with_price(6.50),
        Dish::new("papas-arrugadas", Category::Starters, "Papas arrugadas con mojo", "img/papas-arrugadas.webp")
            .with_desc(Lang::Es, "Papas canarias con mojo rojo y verde.")
            .with_desc(Lang::En, "Canarian wrinkled potatoes with red and green mojo sauce.")
            .with_desc(Lang::De, "Kanarische Runzelkartoffeln mit roter und grüner Mojo.")
            .with_desc(Lang::Fr, "Pommes de terre canariennes avec sauce mojo rouge et verte.")
            .with_price(4.80),
        Dish::new("croquetas-caseras", Category::Starters, "Croquetas caseras", "img/croquetas.webp")
            .with_desc(Lang::Es, "Croquetas de jamón hechas en casa, 6 unidades.")
            .with_desc(Lang::En, "Homemade ham croquettes, 6 pieces.")
            .with_price(5.90),
        Dish::new("gambas-al-ajillo", Category::Starters, "Gambas al ajillo", "img/gambas-ajillo.webp")
            .with_desc(Lang::Es, "Gambas salteadas con ajo y guindilla.")
            .with_desc(Lang::En, "Prawns sautéed with garlic and chilli.")
            .with_desc(Lang::De, "Garnelen mit Knoblauch und Chili.")
            .with_price(8.90),

        // Platos principales
        Dish::new("ropa-vieja", Category::Main, "Ropa vieja", "img/ropa-vieja.webp")
            .with_desc(Lang::Es, "Guiso canario de garbanzos, carne y verduras.")
            .with_desc(Lang::En, "Canarian chickpea stew with meat and vegetables.")
            .with_desc(Lang::De, "Kanarischer Kichererbseneintopf mit Fleisch und Gemüse.")
            .with_desc(Lang::Fr, "Ragoût canarien de pois chiches, viande et légumes.")
            .with_price(9.50),
        Dish::new("cherne-a-la-plancha", Category::Main, "Cherne a la plancha", "img/cherne.webp")
            .with_desc(Lang::Es, "Filete de cherne con papas y ensalada.")
            .with_desc(Lang::En, "Grilled wreckfish fillet with potatoes and salad.")
            .with_price(12.90),
        Dish::new("escaldon-de-gofio", Category::Main, "Escaldón de gofio", "img/escaldon.webp")
            .with_desc(Lang::Es, "Gofio escaldado con caldo de pescado y mojo."),

        // Parrilla
        Dish::new("pollo-asado", Category::Grill, "Pollo asado", "img/pollo-asado.webp")
            .with_desc(Lang::Es, "Pollo al estilo de la casa, con papas fritas.")
            .with_desc(Lang::En, "House-style roast chicken, served with chips.")
            .with_desc(Lang::De, "Hähnchen nach Art des Hauses, mit Pommes.")
            .with_desc(Lang::Fr, "Poulet rôti maison, servi avec frites.")
            .with_half_whole(Some(5.50), Some(10.50)),
        Dish::new("costillas-con-pina", Category::Grill, "Costillas con piña", "img/costillas.webp")
            .with_desc(Lang::Es, "Costillas de cerdo con piña de millo y papas.")
            .with_desc(Lang::En, "Pork ribs with corn on the cob and potatoes.")
            .with_price(9.90),
        Dish::new("secreto-iberico", Category::Grill, "Secreto ibérico", "img/secreto.webp")
            .with_desc(Lang::Es, "Secreto ibérico a la brasa con mojo verde.")
            .with_desc(Lang::En, "Chargrilled Iberian pork secreto with green mojo.")
            .with_price(13.50),

        // Postres
        Dish::new("quesillo", Category::Dessert, "Quesillo", "img/quesillo.webp")
            .with_desc(Lang::Es, "Flan canario de huevo y leche condensada.")
            .with_desc(Lang::En, "Canarian egg and condensed-milk flan.")
            .with_price(3.50),
        Dish::new("principe-alberto", Category::Dessert, "Príncipe Alberto", "img/principe-alberto.webp")
            .with_desc(Lang::Es, "Mousse de chocolate y almendras de La Palma.")
            .with_desc(Lang::En, "Chocolate and almond mousse from La Palma.")
            .with_price(4.20),

        // Refrescos
        Dish::new("refresco-lata", Category::DrinksSoft, "Refresco en lata", "img/refresco.webp")
            .with_desc(Lang::Es, "Cola, naranja, limón o lima-limón. 33 cl.")
            .with_desc(Lang::En, "Cola, orange, lemon or lemon-lime. 33 cl.")
            .with_price(1.80),
        Dish::new("zumo-natural", Category::DrinksSoft, "Zumo natural", "img/zumo.webp")
            .with_desc(Lang::Es, "Zumo de naranja exprimido al momento.")
            .with_desc(Lang::En, "Freshly squeezed orange juice.")
            .with_price(3.00),

        // Cervezas
        Dish::new("dorada-cana", Category::DrinksBeer, "Caña Dorada", "img/dorada.webp")
            .with_desc(Lang::Es, "Cerveza Dorada de barril, 25 cl.")
            .with_desc(Lang::En, "Draught Dorada beer, 25 cl.")
            .with_desc(Lang::De, "Dorada vom Fass, 25 cl.")
            .with_price(1.50),
        Dish::new("dorada-especial", Category::DrinksBeer, "Dorada Especial", "img/dorada-especial.webp")
            .with_desc(Lang::Es, "Botella de Dorada Especial, 33 cl.")
            .with_price(2.20),

        // Aguas
        Dish::new("agua-pequena", Category::DrinksWater, "Agua pequeña", "img/agua.webp")
            .with_desc(Lang::Es, "Botella de agua, 50 cl.")
            .with_desc(Lang::En, "Bottle of water, 50 cl.")
            .with_price(1.20),
        Dish::new("agua-grande", Category::DrinksWater, "Agua grande", "img/agua-grande.webp")
            .with_desc(Lang::Es, "Botella de agua, 1,5 l.")
            .with_price(2.00),

        // Cafés e infusiones
        Dish::new("cafe", Category::DrinksCoffee, "Café solo", "img/cafe.webp")
            .with_desc(Lang::Es, "Espresso corto e intenso.")
            .with_desc(Lang::En, "Short, intense espresso.")
            .with_desc(Lang::De, "Kurzer, kräftiger Espresso.")
            .with_desc(Lang::Fr, "Expresso court et intense.")
            .with_price(1.20),
        Dish::new("barraquito", Category::DrinksCoffee, "Barraquito", "img/barraquito.webp")
            .with_desc(Lang::Es, "Café con leche condensada, licor, canela y limón.")
            .with_desc(Lang::En, "Layered coffee with condensed milk, liqueur, cinnamon and lemon.")
            .with_price(2.50),

        // Licores y combinados
        Dish::new("ron-miel", Category::DrinksLiquor, "Ron miel", "img/ron-miel.webp")
            .with_desc(Lang::Es, "Ron miel canario.")
            .with_desc(Lang::En, "Canarian honey rum.")
            .with_shot_glass(Some(2.00), Some(3.50)),
        Dish::new("licor-de-platano", Category::DrinksLiquor, "Licor de plátano", "img/licor-platano.webp")
            .with_desc(Lang::Es, "Licor de plátano de Canarias.")
            .with_shot_glass(Some(2.00), None),

        // Vinos
        Dish::new("vino-tinto-pais", Category::DrinksWine, "Vino tinto del país", "img/vino-tinto.webp")
            .with_desc(Lang::Es, "Tinto joven de Tacoronte, copa o botella.")
            .with_desc(Lang::En, "Young red from Tacoronte, by the glass or bottle.")
            .with_shot_glass(None, Some(2.80)),
        Dish::new("vino-blanco-afrutado", Category::DrinksWine, "Vino blanco afrutado", "img/vino-blanco.webp")
            .with_desc(Lang::Es, "Blanco afrutado de Lanzarote, copa.")
            .with_shot_glass(None, Some(3.00)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let mut ids: Vec<&str> = DISHES.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn test_seed_has_fallback_description() {
        for dish in DISHES.iter() {
            assert!(
                dish.description.contains_key(&Lang::Es),
                "dish {} is missing the Spanish description",
                dish.id
            );
        }
    }

    #[test]
    fn test_seed_prices_are_valid() {
        for dish in DISHES.iter() {
            for field in PriceField::ALL {
                if let Some(value) = dish.price_field(field) {
                    assert!(value.is_finite() && value >= 0.0, "dish {} has bad {}", dish.id, field.as_str());
                }
            }
        }
    }

    #[test]
    fn test_price_field_roundtrip() {
        let mut dish = Dish::new("x", Category::Main, "X", "img/x.webp");
        dish.set_price_field(PriceField::PriceGlass, 3.25);
        assert_eq!(dish.price_field(PriceField::PriceGlass), Some(3.25));
        assert_eq!(dish.price_field(PriceField::Price), None);
    }
}
