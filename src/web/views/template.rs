use super::notification::{NotificationRegion, Notifications};
use crate::assets::BuiltAssets;
use rstml_component::{write_html, For, HtmlComponent, HtmlContent, HtmlFormatter};
use std::fmt;

const CATEGORIES: [&str; 10] = [
	"All", "TV Shows", "Movies", "Anime", "Netflix", "HBO", "Disney+", "Prime", "Popular", "New",
];

const MENU: [(&str, bool); 7] = [
	("Home", true),
	("TV Shows", false),
	("Movies", false),
	("Trending", false),
	("Watch Later", false),
	("Liked", false),
	("Saved", false),
];

#[derive(HtmlComponent)]
struct NavSearchBox;

impl HtmlContent for NavSearchBox {
	fn fmt(self, formatter: &mut HtmlFormatter) -> fmt::Result {
		write_html!(formatter,
			<div class="flex justify-center flex-1 max-w-2xl">
				<label class="flex items-center w-full gap-2 input input-bordered bg-base-200">
					<input type="search" placeholder="Search reactions..." class="grow" />
					<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-4 h-4 opacity-70">
						<circle cx="11" cy="11" r="8"></circle>
						<path d="m21 21-4.3-4.3"></path>
					</svg>
				</label>
			</div>
		)
	}
}

#[derive(HtmlComponent)]
struct Header;

impl HtmlContent for Header {
	fn fmt(self, formatter: &mut HtmlFormatter) -> fmt::Result {
		write_html!(formatter,
			<header class="sticky top-0 z-40 w-full border-b navbar bg-base-100/95 backdrop-blur border-base-300">
				<div class="flex items-center w-full gap-4 px-4">
					<a class="gap-2 text-xl font-semibold normal-case btn btn-ghost hover:bg-transparent" href="/">
						<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="w-5 h-5 text-red-600">
							<path d="m22 8-6 4 6 4V8Z"></path>
							<rect width="14" height="12" x="2" y="6" rx="2" ry="2"></rect>
						</svg>
						<span>"ReactHub"</span>
					</a>

					<NavSearchBox />
				</div>
			</header>
		)
	}
}

#[derive(HtmlComponent)]
struct Sidebar;

impl HtmlContent for Sidebar {
	fn fmt(self, formatter: &mut HtmlFormatter) -> fmt::Result {
		write_html!(formatter,
			<aside class="hidden w-64 border-r shrink-0 md:block border-base-300">
				<ul class="p-3 menu">
					{For {
						items: MENU,
						children: |f, item| {
							let (label, active) = item;
							let class = if active { "active" } else { "" };
							write_html!(f,
								<li><a class=class href=active.then_some("/")>{label}</a></li>
							)
						},
					}}
				</ul>
			</aside>
		)
	}
}

/// Browse filters on the home page. Only "All" exists so far.
#[derive(HtmlComponent)]
pub struct CategoryFilters;

impl HtmlContent for CategoryFilters {
	fn fmt(self, formatter: &mut HtmlFormatter) -> fmt::Result {
		write_html!(formatter,
			<nav class="py-4 overflow-x-auto" aria-label="Categories">
				<ul class="flex gap-2 min-w-max">
					{For {
						items: CATEGORIES.iter().enumerate(),
						children: |f, item| {
							let (index, category) = item;
							let class = match index {
								0 => "rounded-full btn btn-sm btn-active",
								_ => "rounded-full btn btn-sm btn-ghost",
							};
							write_html!(f, <li><span class=class>{*category}</span></li>)
						},
					}}
				</ul>
			</nav>
		)
	}
}

#[derive(HtmlComponent)]
pub struct Template<'a, T, C>
where
	T: AsRef<str>,
	C: HtmlContent,
{
	pub title: T,
	pub children: C,
	pub notifications: &'a Notifications,
}

impl<'a, T, C> HtmlContent for Template<'a, T, C>
where
	T: AsRef<str>,
	C: HtmlContent,
{
	fn fmt(self, formatter: &mut HtmlFormatter) -> fmt::Result {
		let assets = BuiltAssets::assets();

		write_html!(formatter,
			<!DOCTYPE html>
			<html hx-boost="true">
				<head>
					<meta charset="UTF-8" />
					<meta name="viewport" content="width=device-width, initial-scale=1" />
					<meta name="theme-color" content="#1d232a">
					<link rel="icon" type="image/x-icon" href="/public/favicon.ico">
					<title>{self.title.as_ref()}" | ReactHub"</title>
					<link rel="stylesheet" type="text/css" href=("/public/", assets.css) />
					<script src=("/public/", assets.js) type="module" />
				</head>
				<body class="min-h-screen bg-base-100 text-base-content">
					<Header />
					<div class="flex">
						<Sidebar />
						<main class="flex-1 min-w-0">
							{self.children}
						</main>
					</div>
					<NotificationRegion notifications=self.notifications />
				</body>
			</html>
		)
	}
}
