//! Plain-text rendering of food cards.

use std::fmt::Write;

use crate::food::FoodPlate;

pub fn availability_label(available: bool) -> &'static str {
    if available {
        "Available"
    } else {
        "Unavailable"
    }
}

/// One card: header line, description, then image URL.
pub fn render_food(food: &FoodPlate) -> String {
    format!(
        "#{id} {name} - {price} [{label}]\n    {description}\n    {image}\n",
        id = food.id,
        name = food.name,
        price = food.formatted_price(),
        label = availability_label(food.available),
        description = food.description,
        image = food.image,
    )
}

/// Every card in list order.
pub fn render_list(foods: &[FoodPlate]) -> String {
    if foods.is_empty() {
        return "No food plates\n".to_string();
    }
    let mut out = String::new();
    for food in foods {
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", render_food(food));
    }
    out
}
