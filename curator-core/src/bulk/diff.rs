//! Turns the committed form state into a sparse bulk update payload.

use curator_model::bulk::BulkGalleryUpdateInput;
use curator_model::ids::GalleryID;

use super::form::GalleryForm;

/// Builds the mutation input for `ids` from the form alone.
///
/// Only fields the user touched are written, so the aggregate the form was
/// seeded from plays no part here. Rating and studio edits are sent even
/// when they restate the shared value, and an edit to `None` is sent as an
/// explicit clear. The organized flag is sent only when the user clicked it
/// and left it on a determinate position.
pub fn build_update_input(
    ids: Vec<GalleryID>,
    form: &GalleryForm,
) -> BulkGalleryUpdateInput {
    let mut input = BulkGalleryUpdateInput::new(ids);

    input.title = form.title.edited().cloned();
    input.rating = form.rating.edited().copied();
    input.studio_id = form.studio_id.edited().cloned();
    input.performer_ids = form.performers.to_update();
    input.tag_ids = form.tags.to_update();

    if form.organized_touched {
        input.organized = form.organized.as_option();
    }

    input
}
