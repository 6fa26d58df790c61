use crate::core::state::Creature;
use crate::data::moves::MoveData;
use crate::error::ProviderError;
use crate::provider::DataProvider;

/// Picks the move a creature uses and looks up its data.
///
/// Selection is deterministic: always the first known move.
#[derive(Clone, Copy)]
pub struct MoveResolver<'a> {
    provider: &'a dyn DataProvider,
}

impl<'a> MoveResolver<'a> {
    pub fn new(provider: &'a dyn DataProvider) -> Self {
        Self { provider }
    }

    pub fn select_move(creature: &Creature) -> Option<&str> {
        creature.moves.first().map(String::as_str)
    }

    pub fn get_move_data(&self, move_name: &str) -> Result<MoveData, ProviderError> {
        let move_name = move_name.trim();
        if move_name.is_empty() {
            return Err(ProviderError::invalid_data(move_name, "move name must not be empty"));
        }
        let mut data = self.provider.fetch_move(move_name)?;
        if data.name.is_empty() {
            data.name = move_name.to_lowercase();
        }
        Ok(data)
    }
}
