use std::collections::BTreeSet;

use super::draft::{FieldValue, HotelDraft, HotelField};
use super::model::HotelWithRooms;
use super::validation::{validate, validate_field, FieldErrors};
use crate::image::{ImageManager, Toaster};

/// Form session for creating or editing one hotel listing.
///
/// Owns the draft and the image state; the image field of the draft is
/// refreshed from the image manager at submit time.
#[derive(Debug)]
pub struct HotelForm {
    draft: HotelDraft,
    image: ImageManager,
    editing: bool,
    touched: BTreeSet<HotelField>,
    submitted: bool,
    errors: FieldErrors,
}

impl HotelForm {
    pub fn new(hotel: Option<&HotelWithRooms>, toaster: Toaster) -> Self {
        let draft = hotel.map(|h| HotelDraft::from(&h.hotel)).unwrap_or_default();
        let image = ImageManager::new(hotel.map(|h| h.hotel.image.clone()), toaster);

        Self {
            draft,
            image,
            editing: hotel.is_some(),
            touched: BTreeSet::new(),
            submitted: false,
            errors: FieldErrors::default(),
        }
    }

    pub fn heading(&self) -> &'static str {
        if self.editing {
            "Update Hotel"
        } else {
            "Describe Your Hotel"
        }
    }

    pub fn draft(&self) -> &HotelDraft {
        &self.draft
    }

    pub fn image(&self) -> &ImageManager {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut ImageManager {
        &mut self.image
    }

    /// Errors to render inline: touched fields only until the first submit
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_field(&mut self, value: FieldValue) {
        let field = value.field();
        self.draft.apply(value);
        self.touched.insert(field);

        match validate_field(&self.draft, field) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(field),
        }
    }

    /// Validate everything and hand back the payload to persist.
    ///
    /// Blocked while any rule is violated; afterwards every field's error is visible.
    pub fn submit(&mut self) -> Result<HotelDraft, FieldErrors> {
        self.draft.image = self.image.url().unwrap_or_default().to_string();
        self.submitted = true;

        match validate(&self.draft) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                tracing::info!(values = ?self.draft, "Hotel form submitted");
                Ok(self.draft.clone())
            }
            Err(errors) => {
                tracing::debug!("Hotel form blocked: {}", errors);
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Recompute visible errors, e.g. after the image changed underneath the form
    pub fn revalidate(&mut self) {
        self.draft.image = self.image.url().unwrap_or_default().to_string();

        let mut errors = validate(&self.draft).err().unwrap_or_default();
        if !self.submitted {
            let touched = &self.touched;
            errors.retain(|field| touched.contains(&field));
        }
        self.errors = errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::model::Hotel;
    use crate::image::UploadedFile;

    fn new_form() -> HotelForm {
        let (toaster, _rx) = Toaster::channel();
        HotelForm::new(None, toaster)
    }

    fn fill_valid(form: &mut HotelForm) {
        form.set_field(FieldValue::Title("Heaven Hotel".to_string()));
        form.set_field(FieldValue::Description("A nice quiet place to stay".to_string()));
        form.set_field(FieldValue::Country("USA".to_string()));
        form.set_field(FieldValue::LocationDescription("Near the lake shore".to_string()));
    }

    fn upload(form: &mut HotelForm, url: &str) {
        let files = [UploadedFile { url: url.to_string(), key: None, name: None, size: None }];
        form.image_mut().upload_complete(&files).unwrap();
    }

    #[test]
    fn test_new_form_heading_and_defaults() {
        let form = new_form();
        assert_eq!(form.heading(), "Describe Your Hotel");
        assert_eq!(form.draft(), &HotelDraft::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_edit_form_prepopulates_draft_and_image() {
        let draft = HotelDraft {
            title: "Heaven Hotel".to_string(),
            image: "https://utfs.io/f/abc.png".to_string(),
            pool: true,
            ..HotelDraft::default()
        };
        let hotel = HotelWithRooms::new(Hotel::from_draft("user_1", draft));
        let (toaster, _rx) = Toaster::channel();

        let form = HotelForm::new(Some(&hotel), toaster);

        assert_eq!(form.heading(), "Update Hotel");
        assert_eq!(form.draft().title, "Heaven Hotel");
        assert!(form.draft().pool);
        assert_eq!(form.image().url(), Some("https://utfs.io/f/abc.png"));
    }

    #[test]
    fn test_field_change_revalidates_only_that_field() {
        let mut form = new_form();

        form.set_field(FieldValue::Title("ab".to_string()));
        assert_eq!(form.errors().len(), 1);
        assert!(form.errors().contains(HotelField::Title));

        form.set_field(FieldValue::Title("abc".to_string()));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submit_blocked_without_image() {
        let mut form = new_form();
        fill_valid(&mut form);

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![HotelField::Image]);
        assert!(form.errors().contains(HotelField::Image));
    }

    #[test]
    fn test_submit_reads_latest_image() {
        let mut form = new_form();
        fill_valid(&mut form);
        upload(&mut form, "https://cdn/x.png");

        let values = form.submit().unwrap();
        assert_eq!(values.image, "https://cdn/x.png");
        assert_eq!(values.title, "Heaven Hotel");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_empty_submit_shows_all_required_errors() {
        let mut form = new_form();
        let errors = form.submit().unwrap_err();
        for field in [
            HotelField::Title,
            HotelField::Description,
            HotelField::Image,
            HotelField::Country,
            HotelField::LocationDescription,
        ] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_revalidate_hides_untouched_fields_before_submit() {
        let mut form = new_form();
        form.set_field(FieldValue::Title("x".to_string()));
        form.revalidate();
        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![HotelField::Title]);

        let _ = form.submit();
        upload(&mut form, "https://cdn/x.png");
        form.revalidate();
        assert!(!form.errors().contains(HotelField::Image));
        assert!(form.errors().contains(HotelField::Country));
    }
}
