//! Fixed option sets offered by the enquiry form

/// Class levels open for admission, in display order.
pub const CLASS_LEVELS: &[&str] = &[
    "Nursery", "LKG", "UKG", "Class 1", "Class 2", "Class 3", "Class 4", "Class 5", "Class 6",
    "Class 7", "Class 8", "Class 9", "Class 10",
];

/// Branch locations selectable on the form. Must stay in sync with
/// [`BRANCHES`].
pub const BRANCH_LOCATIONS: &[&str] = &["Court Center", "Bhagya Nagar", "Kurnool Road"];

/// A physical branch of the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    pub location: &'static str,
    /// Shown on the home screen only; never part of an enquiry payload.
    pub contact_phone: &'static str,
}

/// All branches with their front-desk numbers.
pub const BRANCHES: &[Branch] = &[
    Branch {
        location: "Court Center",
        contact_phone: "9490226123",
    },
    Branch {
        location: "Bhagya Nagar",
        contact_phone: "7799587123",
    },
    Branch {
        location: "Kurnool Road",
        contact_phone: "7661064123",
    },
];
