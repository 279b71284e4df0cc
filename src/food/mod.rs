//! Food plate records.
//!
//! The wire shape is shared by the client and the in-memory backend, so
//! these types derive Serde traits and nothing else knows about JSON keys.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the backend.
pub type FoodId = u64;

/// A food plate as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPlate {
    pub id: FoodId,
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Price as entered in the form, e.g. `"19.90"`.
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl FoodPlate {
    /// Price prefixed with the currency sign.
    pub fn formatted_price(&self) -> String {
        format!("$ {}", self.price)
    }

    /// Copy of this plate with the editable fields taken from a form.
    pub fn with_form(&self, form: NewFoodPlate) -> FoodPlate {
        form.into_plate(self.id, self.available)
    }
}

/// Payload of the add/edit form: a plate without `id` and `available`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoodPlate {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl NewFoodPlate {
    /// Attach an id and availability flag.
    pub fn into_plate(self, id: FoodId, available: bool) -> FoodPlate {
        FoodPlate {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available,
        }
    }

    /// Replace only the fields that are given; the rest keep their value.
    pub fn with_overrides(
        self,
        name: Option<String>,
        image: Option<String>,
        price: Option<String>,
        description: Option<String>,
    ) -> NewFoodPlate {
        NewFoodPlate {
            name: name.unwrap_or(self.name),
            image: image.unwrap_or(self.image),
            price: price.unwrap_or(self.price),
            description: description.unwrap_or(self.description),
        }
    }
}

impl From<FoodPlate> for NewFoodPlate {
    fn from(plate: FoodPlate) -> Self {
        Self {
            name: plate.name,
            image: plate.image,
            price: plate.price,
            description: plate.description,
        }
    }
}

/// Body of `POST /foods`: the form plus the initial availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFoodPlate {
    #[serde(flatten)]
    pub form: NewFoodPlate,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> NewFoodPlate {
        NewFoodPlate {
            name: "Ao molho".into(),
            image: "https://example.com/food1.png".into(),
            price: "19.90".into(),
            description: "Macarrão ao molho branco".into(),
        }
    }

    #[test]
    fn test_wire_shape() {
        let plate = form().into_plate(7, true);
        let json = serde_json::to_value(&plate).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Ao molho",
                "image": "https://example.com/food1.png",
                "price": "19.90",
                "description": "Macarrão ao molho branco",
                "available": true,
            })
        );
    }

    #[test]
    fn test_create_body_is_flat() {
        let body = CreateFoodPlate { form: form(), available: true };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "Ao molho");
        assert_eq!(json["available"], true);
        assert!(json.get("form").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_with_form_keeps_id_and_availability() {
        let plate = form().into_plate(3, false);
        let edited = plate.with_form(NewFoodPlate {
            name: "Veggie".into(),
            ..form()
        });
        assert_eq!(edited.id, 3);
        assert!(!edited.available);
        assert_eq!(edited.name, "Veggie");
    }

    #[test]
    fn test_partial_override_keeps_other_fields() {
        let edited = form().with_overrides(None, None, Some("22.50".into()), None);
        assert_eq!(
            edited,
            NewFoodPlate {
                price: "22.50".into(),
                ..form()
            }
        );

        let renamed = form().with_overrides(Some("Ao sugo".into()), None, None, Some("Molho vermelho".into()));
        assert_eq!(renamed.name, "Ao sugo");
        assert_eq!(renamed.description, "Molho vermelho");
        assert_eq!(renamed.image, form().image);
        assert_eq!(renamed.price, "19.90");
    }

    #[test]
    fn test_no_override_is_identity() {
        assert_eq!(form().with_overrides(None, None, None, None), form());
    }

    #[test]
    fn test_formatted_price() {
        assert_eq!(form().into_plate(1, true).formatted_price(), "$ 19.90");
    }
}
