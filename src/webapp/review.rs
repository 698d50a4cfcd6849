pub const RATING_REQUIRED: &str = "Please select a star rating";

/// What a submitted review form hands to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub content: String,
    pub photos: Vec<String>,
}

/// Review write/edit form. A star rating is the one required field;
/// submission is blocked while none is selected.
#[derive(Debug, Default, Clone)]
pub struct ReviewForm {
    rating: u8,
    pub content: String,
    pub photos: Vec<String>,
}

impl ReviewForm {
    pub fn new() -> Self {
        ReviewForm::default()
    }

    /// Editing starts from the existing review's values.
    pub fn edit(rating: u8, content: String, photos: Vec<String>) -> Self {
        ReviewForm {
            rating,
            content,
            photos,
        }
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// The star row offers 1 through 5; anything else is ignored.
    pub fn set_rating(&mut self, stars: u8) {
        if (1..=5).contains(&stars) {
            self.rating = stars;
        }
    }

    pub fn add_photo(&mut self, url: impl Into<String>) {
        self.photos.push(url.into());
    }

    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    pub fn submit(&self) -> Result<ReviewDraft, &'static str> {
        if self.rating == 0 {
            return Err(RATING_REQUIRED);
        }
        Ok(ReviewDraft {
            rating: self.rating,
            content: self.content.clone(),
            photos: self.photos.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_is_blocked_until_a_rating_is_picked() {
        let mut form = ReviewForm::new();
        form.content = "Great terrace for dogs".to_string();
        assert_eq!(form.submit().unwrap_err(), RATING_REQUIRED);

        form.set_rating(4);
        let draft = form.submit().unwrap();
        assert_eq!(draft.rating, 4);
        assert_eq!(draft.content, "Great terrace for dogs");
    }

    #[test]
    fn out_of_range_ratings_are_ignored() {
        let mut form = ReviewForm::new();
        form.set_rating(0);
        form.set_rating(6);
        assert_eq!(form.rating(), 0);
        assert!(form.submit().is_err());

        form.set_rating(5);
        form.set_rating(0);
        assert_eq!(form.rating(), 5);
    }

    #[test]
    fn editing_prefills_and_photos_can_be_removed() {
        let mut form = ReviewForm::edit(
            3,
            "Water bowls outside".to_string(),
            vec!["a.jpg".to_string(), "b.jpg".to_string()],
        );
        form.remove_photo(0);
        form.add_photo("c.jpg");
        form.remove_photo(9);

        let draft = form.submit().unwrap();
        assert_eq!(draft.rating, 3);
        assert_eq!(draft.photos, vec!["b.jpg".to_string(), "c.jpg".to_string()]);
    }
}
