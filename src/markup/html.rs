use crate::catalog::Category;
use crate::markup::builder::Markup;
use crate::page::PageModel;
use crate::view::{CardView, GridView, StarRating};

pub fn render_stars(stars: StarRating) -> Markup {
    let mut markup = Markup::new();
    for _ in 0..stars.filled() {
        markup.raw(r#"<i class="fas fa-star"></i>"#);
    }
    for _ in 0..stars.empty() {
        markup.raw(r#"<i class="far fa-star"></i>"#);
    }
    markup
}

pub fn render_card(card: &CardView) -> Markup {
    let mut markup = Markup::new();
    markup
        .raw(r#"<a href=""#)
        .text(&card.href)
        .raw(r#"" class="block">"#)
        .raw(r#"<div class="product-card bg-white rounded-lg overflow-hidden shadow-md border border-gray-100 h-full flex flex-col">"#)
        .raw(r#"<div class="relative"><img src=""#)
        .text(&card.thumbnail)
        .raw(r#"" alt=""#)
        .text(&card.full_title)
        .raw(r#"" class="w-full h-48 object-cover">"#);
    if card.on_sale {
        markup.raw(r#"<div class="absolute top-2 right-2 bg-red-500 text-white text-xs font-bold px-2 py-1 rounded-full">SALE</div>"#);
    }
    markup
        .raw("</div>")
        .raw(r#"<div class="p-4 flex-1 flex flex-col">"#)
        .raw(r#"<h3 class="font-bold text-lg mb-1 truncate-2">"#)
        .text(&card.title)
        .raw("</h3>")
        .raw(r#"<div class="flex items-center mb-2"><div class="flex text-yellow-400">"#)
        .append(&render_stars(card.stars))
        .raw(r#"</div><span class="text-gray-600 text-sm ml-2">("#)
        .text(card.stock)
        .raw(" in stock)</span></div>")
        .raw(r#"<div class="mt-auto flex items-center justify-between">"#)
        .raw(r#"<div><span class="text-indigo-600 font-bold ml-2">$"#)
        .text(&card.price)
        .raw("</span></div>")
        .raw(r#"<div class="text-sm text-gray-500">Rating "#)
        .text(&card.rating)
        .raw("</div></div></div></div></a>");
    markup
}

/// Renders the display container content in one batch.
pub fn render_grid(grid: &GridView) -> Markup {
    let mut markup = Markup::new();
    match grid {
        GridView::Blank => {}
        GridView::Products(cards) => {
            for card in cards {
                markup.append(&render_card(card));
            }
        }
        GridView::NoResults => {
            markup
                .raw(r#"<div class="col-span-full text-center text-gray-600">"#)
                .text(crate::view::NO_RESULTS_MESSAGE)
                .raw("</div>");
        }
        GridView::Failed => {
            markup
                .raw(r#"<div class="col-span-full text-center text-red-500">"#)
                .text(crate::view::FAILED_MESSAGE)
                .raw("</div>");
        }
    }
    markup
}

/// "All Categories" followed by one option per category.
pub fn render_category_options(categories: &[Category], selected: &str) -> Markup {
    let mut markup = Markup::new();
    if selected.is_empty() {
        markup.raw(r#"<option value="" selected>All Categories</option>"#);
    } else {
        markup.raw(r#"<option value="">All Categories</option>"#);
    }
    for category in categories {
        markup.raw(r#"<option value=""#).text(&category.slug);
        if category.slug == selected {
            markup.raw(r#"" selected>"#);
        } else {
            markup.raw(r#"">"#);
        }
        markup.text(&category.name).raw("</option>");
    }
    markup
}

/// Full HTML document for a page snapshot.
pub fn render_page(model: &PageModel) -> Markup {
    let mut markup = Markup::new();
    markup
        .raw("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n")
        .raw("<meta charset=\"utf-8\">\n")
        .raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n")
        .raw("<title>Shop</title>\n")
        .raw("</head>\n<body class=\"bg-gray-50\">\n");

    markup
        .raw("<header class=\"bg-white shadow\"><nav class=\"container mx-auto flex items-center justify-between p-4\">")
        .raw("<a href=\"index.html\" class=\"text-2xl font-bold text-indigo-600\">Shop</a>")
        .raw("<button id=\"mobileMenuBtn\" class=\"md:hidden\"><i class=\"fas fa-bars\"></i></button>")
        .raw("<a href=\"cart.html\" class=\"relative\"><i class=\"fas fa-shopping-cart\"></i>")
        .raw("<span id=\"cartCount\" class=\"absolute -top-2 -right-2 bg-red-500 text-white text-xs rounded-full px-1\">")
        .text(model.cart_count)
        .raw("</span></a></nav>")
        .raw("<div id=\"mobileMenu\" class=\"hidden md:hidden\">")
        .raw("<a href=\"index.html\" class=\"block px-4 py-2\">Home</a>")
        .raw("<a href=\"shop.html\" class=\"block px-4 py-2\">Shop</a>")
        .raw("<a href=\"cart.html\" class=\"block px-4 py-2\">Cart</a>")
        .raw("</div></header>\n");

    markup
        .raw("<main class=\"container mx-auto p-4\">\n")
        .raw("<div class=\"flex flex-wrap gap-2 mb-4\">")
        .raw("<select id=\"categorySelect\" class=\"border rounded px-2 py-1\">")
        .append(&render_category_options(&model.categories, model.view.category()))
        .raw("</select>")
        .raw("<input id=\"searchInput\" type=\"text\" placeholder=\"Search products\" class=\"border rounded px-2 py-1\" value=\"")
        .text(model.view.query())
        .raw("\">")
        .raw("<button id=\"searchBtn\" class=\"bg-indigo-600 text-white rounded px-3 py-1\">Search</button>")
        .raw("<button id=\"clearFilters\" class=\"border rounded px-3 py-1\">Clear filters</button>")
        .raw("</div>\n");

    if model.loading {
        markup.raw("<div id=\"loader\" class=\"flex justify-center py-8\">Loading...</div>\n");
    } else {
        markup.raw("<div id=\"loader\" class=\"justify-center py-8\" style=\"display:none\"></div>\n");
    }

    markup
        .raw("<div id=\"mainShopContainer\" class=\"grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6\">")
        .append(&render_grid(&model.grid))
        .raw("</div>\n")
        .raw("<div class=\"text-center mt-8\"><button id=\"viewAllBox\" class=\"border rounded px-4 py-2\" data-limit=\"")
        .text(model.view.limit())
        .raw("\">View all</button></div>\n")
        .raw("</main>\n</body>\n</html>\n");
    markup
}
