use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    game::Game,
    id::{GameSlug, SnackId},
    snack::Snack,
};

/// Read-only access to the Games and Snacks catalogs supplied at startup.
/// Lookups by key return `None` on a miss; callers decide whether that is a
/// 404 or simply an entry to skip.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // 全ゲームをカタログ順で取得する
    async fn find_all_games(&self) -> AppResult<Vec<Game>>;
    async fn find_game_by_slug(&self, slug: &GameSlug) -> AppResult<Option<Game>>;
    async fn find_all_snacks(&self) -> AppResult<Vec<Snack>>;
    async fn find_snack_by_id(&self, id: &SnackId) -> AppResult<Option<Snack>>;
}
