//! Page bodies for the HTML views.
//!
//! Functions here are pure: they take view models and return markup, leaving
//! status codes and headers to the handlers.

use std::collections::BTreeSet;

use pagination::{Page, Paginated, page_link};
use url::{Position, Url};

use super::super::html::{avatar_img, escape};
use super::super::query::ViewMode;
use crate::domain::{
    Album, AlbumCard, AlbumDetail, AvatarUrls, ImageSize, Photo, User, UserDetail,
};

const LIST_AVATAR_SIZE: u32 = 32;
const PAGE_LINK_RADIUS: usize = 2;
const PROFILE_AVATAR_SIZE: u32 = 128;

/// Path and query of `url`, suitable for an `href`.
fn relative(url: &Url) -> String {
    url[Position::BeforePath..].to_owned()
}

fn page_href(base: &Url, number: usize) -> String {
    Page::new(number)
        .map(|page| relative(&page_link(base, page)))
        .unwrap_or_default()
}

/// "Page X of Y", treating an empty collection as one page.
#[must_use]
pub fn page_status(page: usize, total_pages: usize) -> String {
    format!("Page {page} of {}", total_pages.max(1))
}

/// First, last, and up to two pages either side of `current`, ascending.
fn visible_pages(current: usize, total_pages: usize) -> BTreeSet<usize> {
    let around = current.saturating_sub(PAGE_LINK_RADIUS).max(1)
        ..=current.saturating_add(PAGE_LINK_RADIUS).min(total_pages);
    [1, total_pages].into_iter().chain(around).collect()
}

/// Previous/next links plus numbered links around the current page.
///
/// Renders nothing for a single page. The first and last pages are always
/// linked; gaps are shown as an ellipsis.
#[must_use]
pub fn pagination_nav(base: &Url, current: usize, total_pages: usize) -> String {
    if total_pages <= 1 {
        return String::new();
    }
    let mut items = Vec::new();
    if current > 1 && current <= total_pages {
        items.push(format!(
            "<a href=\"{}\" rel=\"prev\">Previous</a>",
            escape(&page_href(base, current - 1))
        ));
    }
    let mut last_shown = 0;
    for number in visible_pages(current, total_pages) {
        if number > last_shown + 1 {
            items.push("<span class=\"gap\">&hellip;</span>".to_owned());
        }
        if number == current {
            items.push(format!(
                "<span class=\"current\" aria-current=\"page\">{number}</span>"
            ));
        } else {
            items.push(format!(
                "<a href=\"{}\">{number}</a>",
                escape(&page_href(base, number))
            ));
        }
        last_shown = number;
    }
    if current < total_pages {
        items.push(format!(
            "<a href=\"{}\" rel=\"next\">Next</a>",
            escape(&page_href(base, current + 1))
        ));
    }
    format!(
        "<nav class=\"pages\" aria-label=\"Pagination\">{}</nav>",
        items.concat()
    )
}

fn photo_img(photo: &Photo, size: ImageSize) -> String {
    let class = match size {
        ImageSize::Thumbnail => "thumb",
        ImageSize::Large => "large",
    };
    let (width, height) = size.dimensions();
    format!(
        "<img class=\"{class} loading\" src=\"{src}\" alt=\"{alt}\" width=\"{width}\" \
         height=\"{height}\" loading=\"lazy\" style=\"background:{color}\">",
        src = photo.image_href(size),
        alt = escape(&photo.title),
        color = photo.color.css(),
    )
}

fn cover_img(album: &Album) -> String {
    format!(
        "<img class=\"thumb loading\" src=\"/images/albums/{id}/cover\" alt=\"{alt}\" \
         width=\"150\" height=\"150\" loading=\"lazy\">",
        id = album.id,
        alt = escape(&album.title),
    )
}

fn album_card(album: &Album, owner: Option<&User>, avatars: &AvatarUrls) -> String {
    let byline = owner.map_or_else(String::new, |owner| {
        format!(
            "<p class=\"muted\">{avatar} <a href=\"{href}\">{name}</a><br>\
             <a href=\"{mailto}\">{email}</a></p>",
            avatar = avatar_img(avatars, &owner.name, LIST_AVATAR_SIZE),
            href = owner.href(),
            name = escape(&owner.name),
            mailto = escape(&owner.mailto()),
            email = escape(&owner.email),
        )
    });
    format!(
        "<article class=\"card\"><a href=\"{href}\">{cover}</a><div class=\"body\">\
         <h3><a href=\"{href}\">{title}</a></h3>{byline}</div></article>",
        href = album.href(),
        cover = cover_img(album),
        title = escape(&album.title),
    )
}

fn card_grid(cards: impl Iterator<Item = String>) -> String {
    format!("<div class=\"grid\">{}</div>", cards.collect::<String>())
}

/// Home page: featured albums.
#[must_use]
pub fn home(cards: &[AlbumCard], avatars: &AvatarUrls) -> String {
    let grid = if cards.is_empty() {
        "<p class=\"empty\">No albums yet.</p>".to_owned()
    } else {
        card_grid(
            cards
                .iter()
                .map(|card| album_card(&card.album, Some(&card.owner), avatars)),
        )
    };
    format!(
        "<h1>Featured albums</h1>\n{grid}\n<p><a href=\"/albums\">Browse all albums</a> \
         &middot; <a href=\"/users\">Meet the photographers</a></p>"
    )
}

fn view_toggle(current: ViewMode) -> String {
    let link = |mode: ViewMode, label: &str| {
        let class = if mode == current { " class=\"active\"" } else { "" };
        format!("<a href=\"/albums?view={mode}\"{class}>{label}</a>")
    };
    format!(
        "<p class=\"toggle\">{}{}</p>",
        link(ViewMode::Grid, "Grid"),
        link(ViewMode::Table, "Table")
    )
}

fn album_table(cards: &[AlbumCard], avatars: &AvatarUrls) -> String {
    let rows: String = cards
        .iter()
        .map(|card| {
            format!(
                "<tr><td>{id}</td><td><a href=\"{href}\">{title}</a></td>\
                 <td>{avatar} <a href=\"{owner_href}\">{owner}</a></td></tr>",
                id = card.album.id,
                href = card.album.href(),
                title = escape(&card.album.title),
                avatar = avatar_img(avatars, &card.owner.name, LIST_AVATAR_SIZE),
                owner_href = card.owner.href(),
                owner = escape(&card.owner.name),
            )
        })
        .collect();
    format!(
        "<table><thead><tr><th>ID</th><th>Title</th><th>Owner</th></tr></thead>\
         <tbody>{rows}</tbody></table>"
    )
}

/// Album listing in grid or table layout.
#[must_use]
pub fn album_listing(
    listing: &Paginated<AlbumCard>,
    view: ViewMode,
    base: &Url,
    avatars: &AvatarUrls,
) -> String {
    let content = if listing.data.is_empty() {
        format!(
            "<p class=\"empty\">No albums on this page. <a href=\"/albums?view={view}\">\
             Back to the first page</a></p>"
        )
    } else {
        match view {
            ViewMode::Grid => card_grid(
                listing
                    .data
                    .iter()
                    .map(|card| album_card(&card.album, Some(&card.owner), avatars)),
            ),
            ViewMode::Table => album_table(&listing.data, avatars),
        }
    };
    format!(
        "<h1>Albums</h1>\n{toggle}\n<p class=\"muted\">{total} albums &middot; {status}</p>\n\
         {content}\n{nav}",
        toggle = view_toggle(view),
        total = listing.total,
        status = page_status(listing.page, listing.total_pages),
        nav = pagination_nav(base, listing.page, listing.total_pages),
    )
}

fn viewer(album: &Album, photo: &Photo, page: usize) -> String {
    format!(
        "<section class=\"viewer\" id=\"viewer\">{img}<h2>{title}</h2>\
         <p><a href=\"{href}?page={page}\">Close</a></p></section>",
        img = photo_img(photo, ImageSize::Large),
        title = escape(&photo.title),
        href = album.href(),
    )
}

/// Album detail: owner, counts, photo grid, and the optional viewer.
#[must_use]
pub fn album_detail(detail: &AlbumDetail, base: &Url, avatars: &AvatarUrls) -> String {
    let AlbumDetail {
        album,
        owner,
        photos,
        selected,
    } = detail;
    let viewer = selected
        .as_ref()
        .map_or_else(String::new, |photo| viewer(album, photo, photos.page));
    let grid = if photos.total == 0 {
        "<p class=\"empty\">This album has no photos.</p>".to_owned()
    } else if photos.data.is_empty() {
        format!(
            "<p class=\"empty\">No photos on this page. <a href=\"{}\">Back to the first \
             page</a></p>",
            album.href()
        )
    } else {
        card_grid(photos.data.iter().map(|photo| {
            format!(
                "<article class=\"card\"><a href=\"{href}?page={page}&amp;photo={id}#viewer\">\
                 {img}</a><div class=\"body\">{title}</div></article>",
                href = album.href(),
                page = photos.page,
                id = photo.id,
                img = photo_img(photo, ImageSize::Thumbnail),
                title = escape(&photo.title),
            )
        }))
    };
    format!(
        "<nav class=\"crumbs\" aria-label=\"Breadcrumb\"><a href=\"/albums\">Albums</a> / Show</nav>\n\
         <h1>{title}</h1>\n<p>{avatar} by <a href=\"{owner_href}\">{owner}</a></p>\n\
         <p class=\"muted\">{count} photos &middot; {status}</p>\n{viewer}\n{grid}\n{nav}",
        title = escape(&album.title),
        avatar = avatar_img(avatars, &owner.name, LIST_AVATAR_SIZE),
        owner_href = owner.href(),
        owner = escape(&owner.name),
        count = photos.total,
        status = page_status(photos.page, photos.total_pages),
        nav = pagination_nav(base, photos.page, photos.total_pages),
    )
}

/// User table.
#[must_use]
pub fn users(users: &[User], avatars: &AvatarUrls) -> String {
    let rows: String = users
        .iter()
        .map(|user| {
            format!(
                "<tr><td>{id}</td><td>{avatar}</td><td>{name}</td>\
                 <td><a href=\"{mailto}\">{email}</a></td><td><a href=\"{tel}\">{phone}</a></td>\
                 <td><a href=\"{site_href}\" rel=\"noopener\">{site}</a></td>\
                 <td><a href=\"{href}\">Show</a></td></tr>",
                id = user.id,
                avatar = avatar_img(avatars, &user.name, LIST_AVATAR_SIZE),
                name = escape(&user.name),
                mailto = escape(&user.mailto()),
                email = escape(&user.email),
                tel = escape(&user.tel()),
                phone = escape(&user.phone),
                site_href = escape(&user.website_href()),
                site = escape(&user.website),
                href = user.href(),
            )
        })
        .collect();
    format!(
        "<h1>Users</h1>\n<table><thead><tr><th>ID</th><th>Avatar</th><th>Name</th>\
         <th>Email</th><th>Phone</th><th>Website</th><th></th></tr></thead>\
         <tbody>{rows}</tbody></table>"
    )
}

/// User profile with their albums.
#[must_use]
pub fn user_detail(detail: &UserDetail, base: &Url, avatars: &AvatarUrls) -> String {
    let UserDetail { user, albums } = detail;
    let handle = user
        .username
        .as_deref()
        .map_or_else(String::new, |name| format!(" <span class=\"muted\">@{}</span>", escape(name)));
    let grid = if albums.total == 0 {
        "<p class=\"empty\">No albums yet.</p>".to_owned()
    } else if albums.data.is_empty() {
        format!(
            "<p class=\"empty\">No albums on this page. <a href=\"{}\">Back to the first \
             page</a></p>",
            user.href()
        )
    } else {
        card_grid(albums.data.iter().map(|album| album_card(album, None, avatars)))
    };
    format!(
        "<section class=\"viewer\">{avatar}<h1>{name}{handle}</h1>\
         <p><a href=\"{mailto}\">{email}</a> &middot; <a href=\"{tel}\">{phone}</a> &middot; \
         <a href=\"{site_href}\" rel=\"noopener\">{site}</a></p></section>\n\
         <h2>Albums</h2>\n<p class=\"muted\">{count} albums &middot; {status}</p>\n{grid}\n{nav}",
        avatar = avatar_img(avatars, &user.name, PROFILE_AVATAR_SIZE),
        name = escape(&user.name),
        mailto = escape(&user.mailto()),
        email = escape(&user.email),
        tel = escape(&user.tel()),
        phone = escape(&user.phone),
        site_href = escape(&user.website_href()),
        site = escape(&user.website),
        count = albums.total,
        status = page_status(albums.page, albums.total_pages),
        nav = pagination_nav(base, albums.page, albums.total_pages),
    )
}

#[cfg(test)]
mod tests {
    //! Pagination controls and empty states.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn base() -> Url {
        Url::parse("http://gallery.invalid/albums?view=table&page=4").expect("url")
    }

    #[rstest]
    fn single_page_has_no_controls(base: Url) {
        assert_eq!(pagination_nav(&base, 1, 1), "");
        assert_eq!(pagination_nav(&base, 1, 0), "");
    }

    #[rstest]
    fn controls_keep_other_query_parameters(base: Url) {
        let nav = pagination_nav(&base, 2, 3);
        assert!(nav.contains("href=\"/albums?view=table&amp;page=1\" rel=\"prev\""));
        assert!(nav.contains("<span class=\"current\" aria-current=\"page\">2</span>"));
        assert!(nav.contains("href=\"/albums?view=table&amp;page=3\" rel=\"next\""));
    }

    #[rstest]
    fn long_ranges_collapse_into_gaps(base: Url) {
        let nav = pagination_nav(&base, 10, 20);
        assert!(nav.contains(">1</a>"));
        assert!(nav.contains(">8</a>"));
        assert!(!nav.contains(">7</a>"));
        assert!(nav.contains(">20</a>"));
        assert_eq!(nav.matches("&hellip;").count(), 2);
    }

    #[rstest]
    fn huge_page_counts_render_only_the_visible_links(base: Url) {
        let nav = pagination_nav(&base, 1, 3_000_000_000);
        assert_eq!(nav.matches("<a ").count(), 4);
        assert!(nav.contains(">3000000000</a>"));
        assert_eq!(nav.matches("&hellip;").count(), 1);
    }

    #[rstest]
    fn out_of_range_page_offers_no_previous(base: Url) {
        let nav = pagination_nav(&base, 40, 3);
        assert!(!nav.contains("rel=\"prev\""));
        assert!(!nav.contains("rel=\"next\""));
    }

    #[rstest]
    #[case(1, 0, "Page 1 of 1")]
    #[case(2, 3, "Page 2 of 3")]
    fn page_status_never_reports_zero_pages(
        #[case] page: usize,
        #[case] total_pages: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(page_status(page, total_pages), expected);
    }
}
