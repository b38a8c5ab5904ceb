//! Bookmarkable mapper over the mounted, home page and generic strategies,
//! and the compound chain that puts them together.

mod fixtures;

use fixtures::{MockPage, context};
use rstest::rstest;
use trellis_core::PageParameters;
use trellis_mapper::{
	BookmarkableListenerInterfaceRequestHandler, BookmarkableMapper, BookmarkablePageRequestHandler,
	ComponentPath, CompoundRequestMapper, GenericBookmarkableStrategy, HomePageStrategy, LINK_LISTENER,
	MountedStrategy, PageClass, PageInstanceMapper, RenderPageRequestHandler, Request, RequestHandler,
	RequestMapper,
};

fn mounted(path: &str, class: &str) -> BookmarkableMapper<MountedStrategy> {
	BookmarkableMapper::new(MountedStrategy::new(path, class).unwrap(), context().0)
}

fn render_page(handler: Option<RequestHandler>) -> RenderPageRequestHandler {
	match handler {
		Some(RequestHandler::RenderPage(handler)) => handler,
		other => panic!("expected render-page handler, got {:?}", other),
	}
}

#[rstest]
fn test_mounted_decode_binds_placeholders() {
	// Arrange
	let mapper = mounted("/users/{id}/profile", "UserPage");

	// Act
	let handler = render_page(mapper.map_request(&Request::parse("users/42/profile/extra?tab=info")));

	// Assert
	let provider = handler.page_provider();
	assert!(provider.is_new_page_instance());
	assert_eq!(provider.page_class(), Some(&PageClass::from("UserPage")));
	let parameters = provider.page_parameters();
	assert_eq!(parameters.get_as::<u32>("id"), Ok(42));
	assert_eq!(parameters.get("tab"), Some("info"));
	assert_eq!(parameters.indexed_values(), ["extra"]);
}

#[rstest]
fn test_mounted_decode_hybrid() {
	let mapper = mounted("/users/{id}", "UserPage");

	let handler = render_page(mapper.map_request(&Request::parse("users/42?3.1")));

	let provider = handler.page_provider();
	assert_eq!(provider.page_id(), Some(3));
	assert_eq!(provider.render_count(), Some(1));
	assert_eq!(provider.page_class(), Some(&PageClass::from("UserPage")));
	assert_eq!(provider.page_parameters().get("id"), Some("42"));
}

#[rstest]
#[case("users")]
#[case("users//profile")]
#[case("people/42/profile")]
#[case("users/42/settings")]
fn test_mounted_decode_mismatch(#[case] url: &str) {
	let mapper = mounted("/users/{id}/profile", "UserPage");
	assert!(mapper.map_request(&Request::parse(url)).is_none());
}

#[rstest]
fn test_mounted_encode_bookmarkable() {
	// Arrange
	let mapper = mounted("/users/{id}/profile", "UserPage");
	let mut parameters = PageParameters::new().with("id", "42").with("tab", "info");
	parameters.push_indexed("extra");
	let handler = BookmarkablePageRequestHandler::new(PageClass::from("UserPage"), parameters);

	// Act
	let url = mapper.map_handler(&handler.into());

	// Assert
	assert_eq!(url.unwrap().to_string(), "users/42/profile/extra?tab=info");
}

#[rstest]
#[case("SearchPage", PageParameters::new().with("id", "1"))]
#[case("UserPage", PageParameters::new())]
fn test_mounted_encode_rejects(#[case] class: &str, #[case] parameters: PageParameters) {
	let mapper = mounted("/users/{id}", "UserPage");
	let handler = BookmarkablePageRequestHandler::new(PageClass::from(class), parameters);
	assert!(mapper.map_handler(&handler.into()).is_none());
}

#[rstest]
fn test_mounted_encode_hybrid_for_any_page_of_the_class() {
	// Arrange
	let mapper = mounted("/search", "SearchPage");
	let page = MockPage::new("SearchPage", 8).render_count(2).into_ref();
	let handler = RenderPageRequestHandler::new(
		trellis_mapper::PageProvider::from_page(page).with_parameters(PageParameters::new().with("q", "rust")),
	);

	// Act
	let url = mapper.map_handler(&handler.into());

	// Assert
	assert_eq!(url.unwrap().to_string(), "search?8.2&q=rust");
}

#[rstest]
fn test_mounted_encode_bookmarkable_listener() {
	let mapper = mounted("/search", "SearchPage");
	let handler = BookmarkableListenerInterfaceRequestHandler::for_page(
		MockPage::new("SearchPage", 8).render_count(2).into_ref(),
		ComponentPath::parse("form:go").unwrap(),
		LINK_LISTENER,
		None,
	);

	let url = mapper.map_handler(&handler.into());

	assert_eq!(url.unwrap().to_string(), "search?8.2-ILinkListener-form-go");
}

#[rstest]
fn test_mounted_empty_parameter_survives_round_trip() {
	// Arrange
	let mapper = mounted("/search", "SearchPage");
	let parameters = PageParameters::new().with("advanced", "").with("q", "rust");
	let handler = BookmarkablePageRequestHandler::new(PageClass::from("SearchPage"), parameters.clone());

	// Act
	let url = mapper.map_handler(&handler.into()).unwrap();
	let decoded = render_page(mapper.map_request(&Request::from(url.clone())));

	// Assert
	assert_eq!(url.to_string(), "search?advanced=&q=rust");
	let provider = decoded.page_provider();
	assert!(provider.is_new_page_instance());
	assert_eq!(provider.page_parameters(), &parameters);
	assert_eq!(provider.page_parameters().get("advanced"), Some(""));
}

#[rstest]
fn test_mounted_placeholder_keeps_extra_values() {
	// Arrange
	let mapper = mounted("/users/{id}", "UserPage");
	let parameters = PageParameters::new().with("id", "1").with("id", "2");
	let handler = BookmarkablePageRequestHandler::new(PageClass::from("UserPage"), parameters);

	// Act
	let url = mapper.map_handler(&handler.into()).unwrap();
	let decoded = render_page(mapper.map_request(&Request::from(url.clone())));

	// Assert
	assert_eq!(url.to_string(), "users/1?id=2");
	assert_eq!(decoded.page_provider().page_parameters().values("id"), ["1", "2"]);
}

#[rstest]
#[case("users/42/profile", 2)]
#[case("users/42", 0)]
#[case("other", 0)]
fn test_mounted_score(#[case] url: &str, #[case] expected: i32) {
	let mapper = mounted("/users/{id}/profile", "UserPage");
	assert_eq!(mapper.compatibility_score(&Request::parse(url)), expected);
}

#[rstest]
#[case("", true)]
#[case("/", true)]
#[case("?5", true)]
#[case("home", false)]
fn test_home_page_decode(#[case] url: &str, #[case] matches: bool) {
	let mapper = BookmarkableMapper::new(HomePageStrategy::new("HomePage"), context().0);
	assert_eq!(mapper.map_request(&Request::parse(url)).is_some(), matches);
}

#[rstest]
fn test_home_page_encode() {
	let mapper = BookmarkableMapper::new(HomePageStrategy::new("HomePage"), context().0);
	let page = MockPage::new("HomePage", 5).into_ref();

	let url = mapper.map_handler(&RenderPageRequestHandler::from_page(page).into());

	assert_eq!(url.unwrap().to_string(), "?5");
}

#[rstest]
fn test_home_page_encode_rejects_indexed_parameters() {
	// Arrange
	let (context, _) = context();
	let home = BookmarkableMapper::new(HomePageStrategy::new("HomePage"), context.clone());
	let chain = CompoundRequestMapper::new()
		.with(BookmarkableMapper::new(HomePageStrategy::new("HomePage"), context.clone()))
		.with(BookmarkableMapper::new(GenericBookmarkableStrategy::new(), context));
	let mut parameters = PageParameters::new();
	parameters.push_indexed("x");
	let handler: RequestHandler =
		BookmarkablePageRequestHandler::new(PageClass::from("HomePage"), parameters).into();

	// Act
	let home_url = home.map_handler(&handler);
	let chain_url = chain.map_handler(&handler).unwrap();

	// Assert
	assert!(home_url.is_none());
	assert_eq!(chain_url.to_string(), "wicket/bookmarkable/HomePage/x");
	let decoded = render_page(chain.map_request(&Request::from(chain_url)));
	assert_eq!(decoded.page_provider().page_class(), Some(&PageClass::from("HomePage")));
	assert_eq!(decoded.page_provider().page_parameters().indexed_values(), ["x"]);
}

#[rstest]
fn test_generic_decode() {
	// Arrange
	let mapper = BookmarkableMapper::new(GenericBookmarkableStrategy::new(), context().0);

	// Act
	let handler = render_page(mapper.map_request(&Request::parse("wicket/bookmarkable/SearchPage/first?q=x")));

	// Assert
	let provider = handler.page_provider();
	assert_eq!(provider.page_class(), Some(&PageClass::from("SearchPage")));
	assert_eq!(provider.page_parameters().indexed(0), Some("first"));
	assert_eq!(provider.page_parameters().get("q"), Some("x"));
}

#[rstest]
#[case("wicket/bookmarkable/UnknownPage")]
#[case("wicket/bookmarkable")]
#[case("wicket/page/SearchPage")]
fn test_generic_decode_mismatch(#[case] url: &str) {
	let mapper = BookmarkableMapper::new(GenericBookmarkableStrategy::new(), context().0);
	assert!(mapper.map_request(&Request::parse(url)).is_none());
}

#[rstest]
#[case(true, Some("wicket/bookmarkable/SearchPage?3"))]
#[case(false, None)]
fn test_generic_encode_requires_bookmarkable_creation(
	#[case] created_bookmarkable: bool,
	#[case] expected: Option<&str>,
) {
	// Arrange
	let mapper = BookmarkableMapper::new(GenericBookmarkableStrategy::new(), context().0);
	let mut page = MockPage::new("SearchPage", 3);
	if created_bookmarkable {
		page = page.bookmarkable();
	}

	// Act
	let url = mapper.map_handler(&RenderPageRequestHandler::from_page(page.into_ref()).into());

	// Assert
	assert_eq!(url.map(|url| url.to_string()).as_deref(), expected);
}

#[rstest]
fn test_bookmarkable_request_creates_page_through_source() {
	// Arrange
	let (context, _source) = context();
	let mapper = BookmarkableMapper::new(MountedStrategy::new("/users/{id}", "UserPage").unwrap(), context);

	// Act
	let handler = render_page(mapper.map_request(&Request::parse("users/1")));
	let page = handler.page().unwrap();

	// Assert
	assert_eq!(page.page_class(), PageClass::from("UserPage"));
	assert!(page.was_created_bookmarkable());
	assert_eq!(page.page_id(), 100);
}

fn application() -> CompoundRequestMapper {
	let (context, _) = context();
	CompoundRequestMapper::new()
		.with(BookmarkableMapper::new(
			MountedStrategy::new("/users/{id}", "UserPage").unwrap(),
			context.clone(),
		))
		.with(BookmarkableMapper::new(
			MountedStrategy::new("/wicket/page/special", "HomePage").unwrap(),
			context.clone(),
		))
		.with(BookmarkableMapper::new(HomePageStrategy::new("HomePage"), context.clone()))
		.with(BookmarkableMapper::new(GenericBookmarkableStrategy::new(), context.clone()))
		.with(PageInstanceMapper::new(context))
}

#[rstest]
#[case("", Some("HomePage"))]
#[case("users/7", Some("UserPage"))]
#[case("wicket/bookmarkable/SearchPage", Some("SearchPage"))]
#[case("wicket/page/special", Some("HomePage"))]
#[case("wicket/page?4", None)]
fn test_chain_routes_by_score(#[case] url: &str, #[case] page_class: Option<&str>) {
	let handler = render_page(application().map_request(&Request::parse(url)));

	assert_eq!(
		handler.page_provider().page_class().map(PageClass::name),
		page_class
	);
}

#[rstest]
fn test_chain_no_match() {
	assert!(application().map_request(&Request::parse("nowhere")).is_none());
}

#[rstest]
#[case("UserPage", true, "users/1?9")]
#[case("SearchPage", true, "wicket/bookmarkable/SearchPage?9&id=1")]
#[case("SearchPage", false, "wicket/page?9")]
fn test_chain_encodes_with_first_accepting_mapper(
	#[case] class: &str,
	#[case] created_bookmarkable: bool,
	#[case] expected: &str,
) {
	// Arrange
	let mut page = MockPage::new(class, 9);
	if created_bookmarkable {
		page = page.bookmarkable();
	}
	let handler = RenderPageRequestHandler::new(
		trellis_mapper::PageProvider::from_page(page.into_ref())
			.with_parameters(PageParameters::new().with("id", "1")),
	);

	// Act
	let url = application().map_handler(&handler.into());

	// Assert
	assert_eq!(url.unwrap().to_string(), expected);
}
