// Defines actions produced by key handling and applied to the app state.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddFestival {
        name: String,
        month: String,
        day: String,
    },
    RemoveSelected,
    Quit,
}
