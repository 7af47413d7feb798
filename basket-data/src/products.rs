//! Built-in grocery product list used by the synthetic catalog.

/// A product the synthetic catalog stocks, with its plausible price band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductSpec {
    /// Normalised item key, e.g. `"sour cream"`.
    pub key: &'static str,
    /// Unit of sale.
    pub unit: &'static str,
    /// Lowest plausible unit price in dollars.
    pub min_price: f64,
    /// Highest plausible unit price in dollars.
    pub max_price: f64,
}

impl ProductSpec {
    /// Construct a product entry.
    #[must_use]
    pub const fn new(key: &'static str, unit: &'static str, min_price: f64, max_price: f64) -> Self {
        Self {
            key,
            unit,
            min_price,
            max_price,
        }
    }
}

/// Every product the synthetic catalog knows, grouped by aisle.
pub const PRODUCTS: &[ProductSpec] = &[
    ProductSpec::new("milk", "gallon", 2.99, 5.99),
    ProductSpec::new("cheese", "lb", 3.49, 6.49),
    ProductSpec::new("yogurt", "32 oz", 2.99, 5.99),
    ProductSpec::new("butter", "lb", 3.49, 6.49),
    ProductSpec::new("cream", "pint", 1.99, 4.99),
    ProductSpec::new("sour cream", "16 oz", 1.49, 4.49),
    ProductSpec::new("cream cheese", "8 oz", 1.99, 4.99),
    ProductSpec::new("cottage cheese", "16 oz", 2.49, 5.49),
    ProductSpec::new("apples", "lb", 1.29, 4.29),
    ProductSpec::new("bananas", "lb", 0.59, 3.59),
    ProductSpec::new("oranges", "lb", 1.29, 4.29),
    ProductSpec::new("grapes", "lb", 2.99, 5.99),
    ProductSpec::new("strawberries", "16 oz", 2.99, 5.99),
    ProductSpec::new("blueberries", "pint", 3.49, 6.49),
    ProductSpec::new("lettuce", "head", 1.49, 4.49),
    ProductSpec::new("spinach", "10 oz", 2.49, 5.49),
    ProductSpec::new("tomatoes", "lb", 1.99, 4.99),
    ProductSpec::new("potatoes", "5 lb bag", 3.99, 6.99),
    ProductSpec::new("onions", "lb", 0.99, 3.99),
    ProductSpec::new("carrots", "lb", 0.99, 3.99),
    ProductSpec::new("broccoli", "bunch", 1.99, 4.99),
    ProductSpec::new("bell peppers", "each", 0.99, 3.99),
    ProductSpec::new("cucumbers", "each", 0.79, 3.79),
    ProductSpec::new("avocados", "each", 1.29, 4.29),
    ProductSpec::new("chicken", "lb", 2.99, 5.99),
    ProductSpec::new("beef", "lb", 4.99, 7.99),
    ProductSpec::new("pork", "lb", 3.49, 6.49),
    ProductSpec::new("ground beef", "lb", 3.99, 6.99),
    ProductSpec::new("bacon", "12 oz", 4.99, 7.99),
    ProductSpec::new("sausage", "lb", 3.99, 6.99),
    ProductSpec::new("salmon", "lb", 8.99, 11.99),
    ProductSpec::new("tuna", "lb", 7.99, 10.99),
    ProductSpec::new("shrimp", "lb", 9.99, 12.99),
    ProductSpec::new("bread", "loaf", 2.49, 5.49),
    ProductSpec::new("bagels", "6 pack", 3.49, 6.49),
    ProductSpec::new("muffins", "4 pack", 3.99, 6.99),
    ProductSpec::new("tortillas", "10 pack", 2.49, 5.49),
    ProductSpec::new("rolls", "8 pack", 2.99, 5.99),
    ProductSpec::new("cake", "each", 12.99, 15.99),
    ProductSpec::new("cookies", "dozen", 3.99, 6.99),
    ProductSpec::new("pie", "each", 7.99, 10.99),
    ProductSpec::new("pasta", "16 oz", 1.29, 4.29),
    ProductSpec::new("rice", "2 lb", 2.49, 5.49),
    ProductSpec::new("cereal", "18 oz", 3.49, 6.49),
    ProductSpec::new("flour", "5 lb", 2.99, 5.99),
    ProductSpec::new("sugar", "4 lb", 2.49, 5.49),
    ProductSpec::new("canned soup", "can", 1.49, 4.49),
    ProductSpec::new("canned beans", "can", 0.99, 3.99),
    ProductSpec::new("canned tomatoes", "can", 1.29, 4.29),
    ProductSpec::new("canned tuna", "can", 1.49, 4.49),
    ProductSpec::new("peanut butter", "16 oz", 2.99, 5.99),
    ProductSpec::new("jelly", "12 oz", 2.49, 5.49),
    ProductSpec::new("honey", "12 oz", 4.99, 7.99),
    ProductSpec::new("olive oil", "16 oz", 7.99, 10.99),
    ProductSpec::new("vegetable oil", "32 oz", 2.99, 5.99),
    ProductSpec::new("vinegar", "16 oz", 1.99, 4.99),
    ProductSpec::new("ketchup", "20 oz", 2.49, 5.49),
    ProductSpec::new("mustard", "8 oz", 1.49, 4.49),
    ProductSpec::new("mayonnaise", "30 oz", 3.99, 6.99),
    ProductSpec::new("salsa", "16 oz", 2.99, 5.99),
    ProductSpec::new("soy sauce", "10 oz", 2.49, 5.49),
    ProductSpec::new("water", "24 pack", 3.99, 6.99),
    ProductSpec::new("juice", "64 oz", 2.99, 5.99),
    ProductSpec::new("soda", "12 pack", 4.99, 7.99),
    ProductSpec::new("coffee", "12 oz", 6.99, 9.99),
    ProductSpec::new("tea", "20 bags", 3.49, 6.49),
    ProductSpec::new("beer", "6 pack", 8.99, 11.99),
    ProductSpec::new("wine", "bottle", 9.99, 12.99),
    ProductSpec::new("ice cream", "half gallon", 4.49, 7.49),
    ProductSpec::new("frozen pizza", "each", 4.99, 7.99),
    ProductSpec::new("frozen vegetables", "16 oz", 1.99, 4.99),
    ProductSpec::new("frozen fruit", "16 oz", 2.99, 5.99),
    ProductSpec::new("frozen meals", "each", 3.49, 6.49),
    ProductSpec::new("frozen waffles", "10 pack", 2.99, 5.99),
    ProductSpec::new("chips", "family size", 3.49, 6.49),
    ProductSpec::new("pretzels", "16 oz", 2.99, 5.99),
    ProductSpec::new("popcorn", "6 pack", 3.49, 6.49),
    ProductSpec::new("crackers", "box", 2.99, 5.99),
    ProductSpec::new("nuts", "16 oz", 6.99, 9.99),
    ProductSpec::new("granola bars", "8 pack", 3.49, 6.49),
    ProductSpec::new("chocolate", "bar", 1.49, 4.49),
    ProductSpec::new("candy", "bag", 2.49, 5.49),
    ProductSpec::new("paper towels", "6 rolls", 7.99, 10.99),
    ProductSpec::new("toilet paper", "12 rolls", 8.99, 11.99),
    ProductSpec::new("dish soap", "25 oz", 2.99, 5.99),
    ProductSpec::new("laundry detergent", "100 oz", 9.99, 12.99),
    ProductSpec::new("trash bags", "30 count", 7.99, 10.99),
    ProductSpec::new("aluminum foil", "75 sq ft", 3.99, 6.99),
    ProductSpec::new("plastic wrap", "100 sq ft", 3.49, 6.49),
    ProductSpec::new("sandwich bags", "100 count", 3.99, 6.99),
    ProductSpec::new("eggs", "dozen", 2.49, 5.49),
];
