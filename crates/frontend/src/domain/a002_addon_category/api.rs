use crate::shared::api_utils::get_data;
use contracts::domain::a002_addon_category::aggregate::AddOnCategory;

pub async fn fetch_all() -> Result<Vec<AddOnCategory>, String> {
    get_data("/addon-categories").await
}
