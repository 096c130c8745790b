/// Turn an internal act code into the name players actually see.
///
/// Episode 10 onward was rebranded, so `e10aX` displays as `V25AX`; older
/// codes are just uppercased.
pub fn display_season(short: &str) -> String {
    if let Some(act) = short.strip_prefix("e10a") {
        return format!("V25A{act}");
    }
    short.to_uppercase()
}
