/// Static featured-covers table
///
/// Process-wide immutable data, safe for concurrent reads without locking.
use crate::modules::manga::application::dto::FeaturedCover;
use rand::seq::SliceRandom;

pub const FEATURED_COVERS: &[(&str, &str)] = &[
    (
        "Naruto",
        "https://m.media-amazon.com/images/I/91xUwI2UEVL._AC_UF894,1000_QL80_.jpg",
    ),
    (
        "Demon Slayer",
        "https://http2.mlstatic.com/D_NQ_NP_942681-MLU50423106087_062022-O.webp",
    ),
    (
        "Jojo's",
        "https://m.media-amazon.com/images/I/91XRYa+4cHL._AC_UF1000,1000_QL80_.jpg",
    ),
    (
        "My Hero Academia",
        "https://m.media-amazon.com/images/I/71bELfIWTDL._AC_UF1000,1000_QL80_.jpg",
    ),
    (
        "One Piece",
        "https://m.media-amazon.com/images/I/716EGgqzyOL._AC_UF1000,1000_QL80_.jpg",
    ),
    (
        "Hunter x Hunter",
        "https://www.jbchost.com.br/editorajbc/wp-content/uploads/2008/01/hunterxhunter-01-capaaz.jpg",
    ),
    (
        "Bungo Stray Dogs",
        "https://m.media-amazon.com/images/I/81zJTGwXrtL._AC_UF1000,1000_QL80_.jpg",
    ),
    (
        "Boruto",
        "https://m.media-amazon.com/images/I/81HpeSpReJL._AC_UF1000,1000_QL80_.jpg",
    ),
    (
        "Tokyo Revengers",
        "https://m.media-amazon.com/images/I/711RqaljbIL.jpg",
    ),
    (
        "Record of Ragnarok",
        "https://m.media-amazon.com/images/I/91ifr0L+XrL.jpg",
    ),
    (
        "Dragon Ball",
        "https://m.media-amazon.com/images/I/81fHfEpEHTL._AC_UF1000,1000_QL80_.jpg",
    ),
    (
        "Hellsing",
        "https://m.media-amazon.com/images/I/71KIyHsciwL._AC_UF1000,1000_QL80_.jpg",
    ),
    (
        "Noragami",
        "https://m.media-amazon.com/images/I/91f63co2jKL._AC_UF1000,1000_QL80_.jpg",
    ),
    (
        "The Rising of the Shield Hero",
        "https://m.media-amazon.com/images/I/71szZSLOYGL._AC_UF894,1000_QL80_.jpg",
    ),
];

/// Pick up to `max` random entries from the featured-covers table
pub fn random_covers(max: usize) -> Vec<FeaturedCover> {
    let mut covers: Vec<FeaturedCover> = FEATURED_COVERS
        .iter()
        .map(|(title, url)| FeaturedCover {
            title: (*title).to_string(),
            image_url: (*url).to_string(),
        })
        .collect();

    covers.shuffle(&mut rand::thread_rng());
    covers.truncate(max);
    covers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_covers_bounded_by_request_and_table() {
        assert_eq!(random_covers(3).len(), 3);
        assert_eq!(random_covers(0).len(), 0);
        assert_eq!(random_covers(100).len(), FEATURED_COVERS.len());
    }

    #[test]
    fn test_random_covers_come_from_the_table() {
        for cover in random_covers(FEATURED_COVERS.len()) {
            assert!(FEATURED_COVERS
                .iter()
                .any(|(t, u)| *t == cover.title && *u == cover.image_url));
        }
    }
}
