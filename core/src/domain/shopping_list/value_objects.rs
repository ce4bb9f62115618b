use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SetItemCheckedInput {
    pub shopping_list_id: Uuid,
    pub item_id: Uuid,
    pub checked: bool,
}
