use crate::config::SiteConfig;
use crate::effect::Effect;
use crate::error::FormError;

pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewStage {
    #[default]
    Rating,
    Feedback,
}

/// Star rating that routes top ratings to the public review page and
/// everything else to a private feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewFlow {
    rating: u8,
    hover_rating: u8,
    stage: ReviewStage,
}

impl ReviewFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> ReviewStage {
        self.stage
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn hover(&mut self, star: u8) {
        self.hover_rating = star.min(MAX_STARS);
    }

    pub fn leave(&mut self) {
        self.hover_rating = 0;
    }

    /// Star `star` is lit when it falls within the hovered range, or the
    /// selected range when nothing is hovered.
    pub fn is_highlighted(&self, star: u8) -> bool {
        let reference = if self.hover_rating > 0 {
            self.hover_rating
        } else {
            self.rating
        };
        reference >= star
    }

    /// Pick a rating. Five stars opens the review page and closes the modal;
    /// anything lower switches to the feedback form.
    pub fn select_star(&mut self, star: u8, config: &SiteConfig) -> Result<Vec<Effect>, FormError> {
        if !(1..=MAX_STARS).contains(&star) {
            return Err(FormError::InvalidStar(star));
        }
        self.rating = star;
        if star == MAX_STARS {
            Ok(vec![
                Effect::OpenExternal(config.review_url.clone()),
                Effect::CloseModal,
            ])
        } else {
            self.stage = ReviewStage::Feedback;
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_stars_opens_review_page_once() {
        let config = SiteConfig::default();
        let mut flow = ReviewFlow::new();
        let effects = flow.select_star(5, &config).unwrap();
        assert_eq!(Effect::navigations(&effects), 1);
        assert_eq!(effects[0], Effect::OpenExternal(config.review_url.clone()));
        assert!(Effect::closes(&effects));
        assert_eq!(flow.stage(), ReviewStage::Rating);
    }

    #[test]
    fn test_lower_ratings_go_to_feedback_without_navigation() {
        for star in 1..MAX_STARS {
            let mut flow = ReviewFlow::new();
            let effects = flow.select_star(star, &SiteConfig::default()).unwrap();
            assert!(effects.is_empty());
            assert_eq!(flow.stage(), ReviewStage::Feedback);
            assert_eq!(flow.rating(), star);
        }
    }

    #[test]
    fn test_out_of_range_star_rejected() {
        let mut flow = ReviewFlow::new();
        assert_eq!(
            flow.select_star(0, &SiteConfig::default()),
            Err(FormError::InvalidStar(0))
        );
        assert_eq!(
            flow.select_star(6, &SiteConfig::default()),
            Err(FormError::InvalidStar(6))
        );
        assert_eq!(flow, ReviewFlow::new());
    }

    #[test]
    fn test_hover_overrides_rating_highlight() {
        let mut flow = ReviewFlow::new();
        assert!(!flow.is_highlighted(1));

        flow.hover(3);
        assert!(flow.is_highlighted(1));
        assert!(flow.is_highlighted(3));
        assert!(!flow.is_highlighted(4));

        flow.leave();
        assert!(!flow.is_highlighted(1));
    }
}
