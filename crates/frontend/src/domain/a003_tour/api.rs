use crate::shared::api_utils::get_data;
use contracts::domain::a003_tour::aggregate::Tour;

pub async fn fetch_all() -> Result<Vec<Tour>, String> {
    get_data("/tours").await
}
