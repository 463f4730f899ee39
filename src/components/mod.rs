pub mod cart;
pub mod counter;
pub mod item_stack;
pub mod order;
pub mod product_card;
pub mod promo_list;
