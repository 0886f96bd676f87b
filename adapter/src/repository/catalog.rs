use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    game::Game,
    id::{GameSlug, SnackId},
    snack::Snack,
};
use kernel::repository::catalog::CatalogRepository;
use shared::error::AppResult;

/// Catalogs held in memory for the process lifetime. Seeded once at startup
/// and never mutated, so lookups can clone freely without locking.
#[derive(new)]
pub struct CatalogRepositoryImpl {
    games: Vec<Game>,
    snacks: Vec<Snack>,
}

impl CatalogRepositoryImpl {
    /// The café's current lineup and menu.
    pub fn seeded() -> Self {
        Self::new(seed_games(), seed_snacks())
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn find_all_games(&self) -> AppResult<Vec<Game>> {
        Ok(self.games.clone())
    }

    async fn find_game_by_slug(&self, slug: &GameSlug) -> AppResult<Option<Game>> {
        Ok(self.games.iter().find(|g| &g.slug == slug).cloned())
    }

    async fn find_all_snacks(&self) -> AppResult<Vec<Snack>> {
        Ok(self.snacks.clone())
    }

    async fn find_snack_by_id(&self, id: &SnackId) -> AppResult<Option<Snack>> {
        Ok(self.snacks.iter().find(|s| &s.id == id).cloned())
    }
}

fn game(slug: &str, title: &str, platform: &str, price_per_hour: u32) -> Game {
    Game {
        slug: GameSlug::from(slug),
        title: title.into(),
        platform: platform.into(),
        price_per_hour,
        description: None,
    }
}

fn seed_games() -> Vec<Game> {
    vec![
        game("valorant", "Valorant", "PC", 80),
        game("fifa24", "FIFA 24", "PS5", 120),
        game("gta5", "GTA V", "Xbox", 100),
        game("csgo", "CS:GO 2", "PC", 90),
        game("fortnite", "Fortnite", "Multi", 70),
        game("cod", "Call of Duty", "Multi", 110),
        game("apex", "Apex Legends", "Multi", 85),
        game("minecraft", "Minecraft", "Multi", 60),
        game("mortal", "Mortal Kombat 11", "PS5", 115),
        game("halo", "Halo Infinite", "Xbox", 105),
        game("league", "League of Legends", "PC", 75),
        game("rocket", "Rocket League", "Multi", 80),
    ]
}

fn snack(id: &str, name: &str, price: u32, icon: &str) -> Snack {
    Snack {
        id: SnackId::from(id),
        name: name.into(),
        price,
        icon: Some(icon.into()),
    }
}

fn seed_snacks() -> Vec<Snack> {
    vec![
        snack("fries", "Fries", 80, "🍟"),
        snack("sandwich", "Sandwich", 120, "🥪"),
        snack("coldcoffee", "Cold Coffee", 90, "☕"),
        snack("mojito", "Mocktail Mojito", 150, "🍹"),
        snack("burger", "Veg Burger", 140, "🍔"),
        snack("pizza", "Pizza Slice", 160, "🍕"),
        snack("soda", "Soda", 60, "🥤"),
        snack("nachos", "Nachos", 110, "🌮"),
        snack("icecream", "Ice Cream", 100, "🍦"),
        snack("popcorn", "Popcorn", 70, "🍿"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_catalogs_are_complete() -> anyhow::Result<()> {
        let repo = CatalogRepositoryImpl::seeded();
        assert_eq!(repo.find_all_games().await?.len(), 12);
        assert_eq!(repo.find_all_snacks().await?.len(), 10);
        Ok(())
    }

    #[tokio::test]
    async fn game_lookup_hits_by_slug() -> anyhow::Result<()> {
        let repo = CatalogRepositoryImpl::seeded();
        let game = repo
            .find_game_by_slug(&GameSlug::from("valorant"))
            .await?
            .unwrap();
        assert_eq!(game.title, "Valorant");
        assert_eq!(game.platform, "PC");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_slug_is_an_explicit_miss() -> anyhow::Result<()> {
        let repo = CatalogRepositoryImpl::seeded();
        let res = repo.find_game_by_slug(&GameSlug::from("tetris")).await?;
        assert!(res.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn snack_lookup_carries_unit_price() -> anyhow::Result<()> {
        let repo = CatalogRepositoryImpl::seeded();
        let snack = repo
            .find_snack_by_id(&SnackId::from("fries"))
            .await?
            .unwrap();
        assert_eq!(snack.price, 80);
        Ok(())
    }
}
