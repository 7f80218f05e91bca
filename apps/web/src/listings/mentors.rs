use crate::models::mentor::MentorProfile;

/// The mentor region is a straight projection of the catalog: no filter, no
/// empty state.
pub fn mentor_listing(catalog: &[MentorProfile]) -> &[MentorProfile] {
    catalog
}
