use getset::CopyGetters;
use utils::QueryParams;

/// Optional extras for the movie details endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, CopyGetters)]
#[get_copy = "pub"]
pub struct DetailsOptions {
    with_images: bool,
    with_cast: bool,
}

impl DetailsOptions {
    pub fn new(with_images: bool, with_cast: bool) -> Self {
        Self {
            with_images,
            with_cast,
        }
    }

    pub(crate) fn apply_to(&self, params: &mut QueryParams) {
        params.push_flag("with_images", self.with_images);
        params.push_flag("with_cast", self.with_cast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_set_flags_are_forwarded() {
        let mut params = QueryParams::new();
        DetailsOptions::new(true, false).apply_to(&mut params);

        assert_eq!(params.to_query_string(), "with_images=true");
    }
}
