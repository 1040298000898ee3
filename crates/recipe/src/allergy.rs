/// Expands a comma separated allergy list into the strings to exclude.
///
/// Each token is trimmed and lower-cased, then contributes itself, its form
/// without a trailing `s` and its form without a trailing `es`, so
/// `tomatoes` yields `tomatoes`, `tomatoe` and `tomato`. Empty tokens and
/// empty stripped forms are dropped.
pub fn expand_allergens(text: &str) -> Vec<String> {
    let mut allergens = Vec::new();

    for token in text.split(',') {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            continue;
        }

        let without_s = token.strip_suffix('s').map(str::to_owned);
        let without_es = token.strip_suffix("es").map(str::to_owned);

        for allergen in [Some(token), without_s, without_es].into_iter().flatten() {
            if !allergen.is_empty() && !allergens.contains(&allergen) {
                allergens.push(allergen);
            }
        }
    }

    allergens
}
