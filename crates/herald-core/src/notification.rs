//! The notification event data model.
//!
//! A notification event is an accessibility-subsystem signal that lets
//! assistive technology announce text to the user outside the normal
//! visual-change detection path. Each event carries a [`NotificationKind`]
//! classifying what happened, a [`NotificationProcessing`] policy describing
//! how competing announcements should be coalesced, the text to announce,
//! and an activity id that groups related announcements.
//!
//! The kind and processing value sets mirror the platform UI Automation
//! enumerations so backends can pass them through unchanged.

/// The semantic type of a notification event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// An item was added to the user's working set.
    ItemAdded,
    /// An item was removed from the user's working set.
    ItemRemoved,
    /// An action the user requested has completed.
    ActionCompleted,
    /// An action the user requested was aborted.
    ActionAborted,
    /// Anything not covered by the other kinds.
    Other,
}

/// How assistive technology should process this event relative to other
/// pending announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationProcessing {
    /// Speak immediately, then speak all queued announcements.
    ImportantAll,
    /// Speak immediately, dropping queued announcements with the same
    /// activity id except the most recent.
    ImportantMostRecent,
    /// Queue behind current speech; speak every announcement.
    All,
    /// Queue behind current speech; keep only the most recent announcement
    /// with the same activity id.
    MostRecent,
    /// Finish the current announcement, then speak only the most recent.
    CurrentThenMostRecent,
}

/// A single notification event request.
///
/// Both strings are immutable at call time; the request borrows them for the
/// duration of the platform call only.
#[derive(Debug, Clone, Copy)]
pub struct NotificationRequest<'a> {
    /// What kind of change this announcement describes.
    pub kind: NotificationKind,
    /// Coalescing policy for competing announcements.
    pub processing: NotificationProcessing,
    /// The text for assistive technology to announce.
    pub text: &'a str,
    /// Identifier grouping related announcements (e.g. `"Status update"`).
    pub activity_id: &'a str,
}
