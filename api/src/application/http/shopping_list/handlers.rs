pub mod generate_shopping_list;
pub mod get_shopping_lists;
pub mod set_item_checked;
