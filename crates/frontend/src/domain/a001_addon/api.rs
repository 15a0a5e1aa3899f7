use crate::shared::api_utils::{delete, get_data, post_data, put_data};
use contracts::domain::a001_addon::aggregate::{AddOn, AddOnDto, AddOnId};

pub async fn fetch_all() -> Result<Vec<AddOn>, String> {
    get_data("/add-ons").await
}

pub async fn create(dto: &AddOnDto) -> Result<AddOn, String> {
    dto.validate()?;
    post_data("/add-ons", &dto.normalized()).await
}

pub async fn update(id: AddOnId, dto: &AddOnDto) -> Result<AddOn, String> {
    dto.validate()?;
    put_data(&format!("/add-ons/{}", id), &dto.normalized()).await
}

pub async fn delete_by_id(id: AddOnId) -> Result<(), String> {
    delete(&format!("/add-ons/{}", id)).await
}
