pub struct Coin {
    /// CoinGecko asset id, also used as the callback payload.
    pub id: &'static str,
    /// Human label for keyboard buttons.
    pub label: &'static str,
}

/// The tracked roster. Order matters: scheduled runs and the top-three
/// shortcut both follow it.
pub const ALL: &[Coin] = &[
    Coin { id: "bitcoin", label: "Bitcoin" },
    Coin { id: "ethereum", label: "Ethereum" },
    Coin { id: "ripple", label: "Ripple" },
    Coin { id: "litecoin", label: "Litecoin" },
    Coin { id: "cardano", label: "Cardano" },
    Coin { id: "polkadot", label: "Polkadot" },
    Coin { id: "solana", label: "Solana" },
    Coin { id: "binancecoin", label: "Binance Coin" },
    Coin { id: "dogecoin", label: "Dogecoin" },
    Coin { id: "polygon", label: "Polygon" },
];

pub fn top_three() -> &'static [Coin] {
    &ALL[..3]
}

pub fn find(id: &str) -> Option<&'static Coin> {
    ALL.iter().find(|c| c.id == id)
}

/// Caption name: the asset id with its first letter uppercased,
/// e.g. "bitcoin" -> "Bitcoin", "binancecoin" -> "Binancecoin".
pub fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_ten_coins_in_declared_order() {
        let ids: Vec<&str> = ALL.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            [
                "bitcoin",
                "ethereum",
                "ripple",
                "litecoin",
                "cardano",
                "polkadot",
                "solana",
                "binancecoin",
                "dogecoin",
                "polygon"
            ]
        );
    }

    #[test]
    fn top_three_is_exactly_the_first_three() {
        let ids: Vec<&str> = top_three().iter().map(|c| c.id).collect();
        assert_eq!(ids, ["bitcoin", "ethereum", "ripple"]);
    }

    #[test]
    fn find_hits_roster_ids_only() {
        assert_eq!(find("dogecoin").map(|c| c.label), Some("Dogecoin"));
        assert!(find("show_top_three").is_none());
        assert!(find("tether").is_none());
    }

    #[test]
    fn display_name_capitalizes_first_letter() {
        assert_eq!(display_name("bitcoin"), "Bitcoin");
        assert_eq!(display_name("binancecoin"), "Binancecoin");
        assert_eq!(display_name(""), "");
    }
}
