/// Options following the first comma of a field annotation, without the
/// leading comma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagOptions<'a>(&'a str);

/// Splits a field annotation such as `"min,required"` into its lookup key and
/// comma-separated options.
///
/// An empty key means the field is not eligible for decoding.
pub fn parse_tag(annotation: &str) -> (&str, TagOptions<'_>) {
    match annotation.split_once(',') {
        Some((key, options)) => (key, TagOptions(options)),
        None => (annotation, TagOptions("")),
    }
}

impl<'a> TagOptions<'a> {
    /// Reports whether `name` is one of the options. Matching is exact on
    /// whole comma-delimited items.
    pub fn contains(&self, name: &str) -> bool {
        !self.0.is_empty() && self.iter().any(|option| option == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.0.split(',').filter(|option| !option.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
