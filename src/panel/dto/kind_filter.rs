use crate::repository::NotificationKind;

///
/// Per panel view filter. Changing it never affects other panels
/// or the stored feed.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    All,
    Emergency,
    /// Shift start and shift end records. Interval events arrive
    /// as shift start records so they match too.
    Shift,
    Feedback,
}

impl KindFilter {
    pub fn matches(self, kind: NotificationKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Emergency => kind == NotificationKind::Emergency,
            KindFilter::Shift => matches!(
                kind,
                NotificationKind::ShiftStarted | NotificationKind::ShiftEnded
            ),
            KindFilter::Feedback => kind == NotificationKind::Feedback,
        }
    }
}
