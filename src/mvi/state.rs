/// Read model produced by a [`super::Reducer`].
///
/// `Default` is the state before any intent was applied. `Sync` lets a
/// snapshot be read from several threads while a holder swaps in new ones.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {
    /// Whether `self` is what a reducer returns when it left `previous`
    /// alone.
    ///
    /// Falls back to value equality. States that keep their tree behind
    /// `Arc` override this with a pointer comparison.
    fn is_unchanged_from(&self, previous: &Self) -> bool {
        self == previous
    }
}
