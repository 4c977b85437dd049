use qualitrack::model::identity::Identity;

#[derive(Clone, Default)]
pub struct UserState {
    pub identity: Option<Identity>,
    /// True once the identity lookup finished, whatever its result
    pub fetched: bool,
}
