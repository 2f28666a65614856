/// Flag shown next to a language in selection lists; unknown codes get none
pub fn language_flag(code: &str) -> &'static str {
    match code {
        "en" => "🇺🇸",
        "de" => "🇩🇪",
        "es" => "🇪🇸",
        "fr" => "🇫🇷",
        "it" => "🇮🇹",
        "pt" => "🇵🇹",
        _ => "",
    }
}
