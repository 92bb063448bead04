use crate::value_objects::enums::sort_order::SortOrder;

#[derive(Debug, Clone, Default)]
pub struct ListSongsFilter {
    pub title: Option<String>,
    pub sort_order: SortOrder,
}
