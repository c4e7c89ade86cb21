///
/// How a panel presents the feed.
///
/// The two modes share every behavior except the body: dropdown panels
/// show a shortened preview, full page panels show the whole text.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Dropdown,
    FullPage,
}
