const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four",
    "Five", "Six", "Seven", "Eight", "Nine",
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen",
    "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen"
];

const ONES_ORDINAL: [&str; 20] = [
    "Zeroth", "First", "Second", "Third", "Fourth",
    "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
    "Tenth", "Eleventh", "Twelfth", "Thirteenth", "Fourteenth",
    "Fifteenth", "Sixteenth", "Seventeenth", "Eighteenth", "Nineteenth"
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty",
    "Fifty", "Sixty", "Seventy", "Eighty", "Ninety"
];

const TENS_ORDINAL: [&str; 10] = [
    "", "", "Twentieth", "Thirtieth", "Fortieth",
    "Fiftieth", "Sixtieth", "Seventieth", "Eightieth", "Ninetieth"
];

const LARGEST_SPELLED: u64 = 999_999;
const CACHED_ORDINALS: usize = 60;

/// Capitalised English ordinal words: 3 -> "Third", 22 -> "Twenty-Second".
///
/// The first few dozen ordinals (every week number a liturgical season can
/// reach) are spelled once at construction and served from the cache.
#[derive(Debug, Clone)]
pub struct OrdinalFormatter {
    cache: Vec<String>
}

impl OrdinalFormatter {
    pub fn new() -> OrdinalFormatter {
        let cache = (0..=CACHED_ORDINALS as u64)
            .map(spell_ordinal)
            .collect();
        OrdinalFormatter { cache }
    }

    pub fn ordinal(&self, n: u64) -> String {
        match self.cache.get(n as usize) {
            Some(word) => word.clone(),
            None => spell_ordinal(n)
        }
    }
}

impl Default for OrdinalFormatter {
    fn default() -> Self {
        OrdinalFormatter::new()
    }
}

fn spell_below_hundred(n: u64, ordinal: bool) -> String {
    let n = n as usize;
    if n < 20 {
        let words = if ordinal { ONES_ORDINAL } else { ONES };
        return words[n].to_owned();
    }
    let (tens, ones) = (n / 10, n % 10);
    match (ones, ordinal) {
        (0, true) => TENS_ORDINAL[tens].to_owned(),
        (0, false) => TENS[tens].to_owned(),
        (_, true) => format!("{}-{}", TENS[tens], ONES_ORDINAL[ones]),
        (_, false) => format!("{}-{}", TENS[tens], ONES[ones])
    }
}

fn spell_below_thousand(n: u64, ordinal: bool) -> String {
    let (hundreds, rest) = (n / 100, n % 100);
    if hundreds == 0 {
        return spell_below_hundred(rest, ordinal);
    }
    let head = ONES[hundreds as usize];
    match (rest, ordinal) {
        (0, true) => format!("{} Hundredth", head),
        (0, false) => format!("{} Hundred", head),
        _ => format!("{} Hundred and {}", head, spell_below_hundred(rest, ordinal))
    }
}

fn spell_ordinal(n: u64) -> String {
    if n > LARGEST_SPELLED {
        return format!("{}{}", n, numeric_suffix(n));
    }
    let (thousands, rest) = (n / 1000, n % 1000);
    if thousands == 0 {
        return spell_below_thousand(rest, true);
    }
    let head = spell_below_thousand(thousands, false);
    match rest {
        0 => format!("{} Thousandth", head),
        r if r < 100 => format!("{} Thousand and {}", head, spell_below_hundred(r, true)),
        r => format!("{} Thousand {}", head, spell_below_thousand(r, true))
    }
}

fn numeric_suffix(n: u64) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th"
    }
}
