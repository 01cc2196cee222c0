//! Catalog cache keys.
//!
//! Each template documents its positional arguments; the typed builders
//! below take them in the same order. Role lists are passed as ids and
//! rendered comma separated; hashed arguments go through [`ids_hash`].

use super::keys::{CacheKeyTemplate, id_list, ids_hash};

// ============================================================================
// Categories
// ============================================================================

/// {0} parent category id, {1} show hidden, {2} customer id, {3} store id
pub const CATEGORIES_BY_PARENT: CacheKeyTemplate = CacheKeyTemplate::new(
    "CategoriesByParentCategoryId",
    "storefront.category.byparent-{0}-{1}-{2}-{3}",
    "storefront.category.byparent-{0}",
);

/// {0} parent category id, {1} customer roles, {2} store id, {3} show hidden
pub const CATEGORIES_CHILD_IDENTIFIERS: CacheKeyTemplate = CacheKeyTemplate::new(
    "CategoriesChildIdentifiers",
    "storefront.category.childidentifiers-{0}-{1}-{2}-{3}",
    "storefront.category.childidentifiers-{0}",
);

pub const CATEGORIES_HOMEPAGE_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "CategoriesAllDisplayedOnHomepage",
    "storefront.category.homepage.all",
    "storefront.category.homepage",
);

/// {0} store id, {1} customer roles
pub const CATEGORIES_HOMEPAGE_WITHOUT_HIDDEN: CacheKeyTemplate = CacheKeyTemplate::new(
    "CategoriesDisplayedOnHomepageWithoutHidden",
    "storefront.category.homepage.withouthidden-{0}-{1}",
    "storefront.category.homepage",
);

/// {0} category id, {1} customer roles, {2} store id, {3} language id
pub const CATEGORY_BREADCRUMB: CacheKeyTemplate = CacheKeyTemplate::new(
    "CategoryBreadcrumb",
    "storefront.category.breadcrumb-{0}-{1}-{2}-{3}",
    "storefront.category.breadcrumb",
);

/// {0} store id, {1} customer roles, {2} show hidden
pub const CATEGORIES_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "CategoriesAll",
    "storefront.category.all-{0}-{1}-{2}",
    "storefront.category.all",
);

/// {0} category id, {1} show hidden, {2} page index, {3} page size,
/// {4} customer id, {5} store id
pub const PRODUCT_CATEGORIES_BY_CATEGORY: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductCategoriesAllByCategoryId",
    "storefront.productcategory.allbycategoryid-{0}-{1}-{2}-{3}-{4}-{5}",
    "storefront.productcategory.allbycategoryid-{0}",
);

/// {0} product id, {1} show hidden, {2} customer id, {3} store id
pub const PRODUCT_CATEGORIES_BY_PRODUCT: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductCategoriesAllByProductId",
    "storefront.productcategory.allbyproductid-{0}-{1}-{2}-{3}",
    "storefront.productcategory.allbyproductid-{0}",
);

/// {0} customer roles hash, {1} store id, {2} category ids hash
pub const CATEGORY_NUMBER_OF_PRODUCTS: CacheKeyTemplate = CacheKeyTemplate::new(
    "CategoryNumberOfProducts",
    "storefront.productcategory.numberofproducts-{0}-{1}-{2}",
    "storefront.productcategory.numberofproducts",
);

pub fn categories_by_parent(
    parent_category_id: u32,
    show_hidden: bool,
    customer_id: u32,
    store_id: u32,
) -> String {
    CATEGORIES_BY_PARENT.key(&[&parent_category_id, &show_hidden, &customer_id, &store_id])
}

pub fn categories_by_parent_prefix(parent_category_id: u32) -> String {
    CATEGORIES_BY_PARENT.prefix(&[&parent_category_id])
}

pub fn categories_child_identifiers(
    parent_category_id: u32,
    customer_role_ids: &[u32],
    store_id: u32,
    show_hidden: bool,
) -> String {
    CATEGORIES_CHILD_IDENTIFIERS.key(&[
        &parent_category_id,
        &id_list(customer_role_ids),
        &store_id,
        &show_hidden,
    ])
}

pub fn categories_child_identifiers_prefix(parent_category_id: u32) -> String {
    CATEGORIES_CHILD_IDENTIFIERS.prefix(&[&parent_category_id])
}

pub fn categories_homepage_all() -> String {
    CATEGORIES_HOMEPAGE_ALL.key(&[])
}

pub fn categories_homepage_without_hidden(store_id: u32, customer_role_ids: &[u32]) -> String {
    CATEGORIES_HOMEPAGE_WITHOUT_HIDDEN.key(&[&store_id, &id_list(customer_role_ids)])
}

pub fn categories_homepage_prefix() -> String {
    CATEGORIES_HOMEPAGE_ALL.prefix(&[])
}

pub fn category_breadcrumb(
    category_id: u32,
    customer_role_ids: &[u32],
    store_id: u32,
    language_id: u32,
) -> String {
    CATEGORY_BREADCRUMB.key(&[
        &category_id,
        &id_list(customer_role_ids),
        &store_id,
        &language_id,
    ])
}

pub fn category_breadcrumb_prefix() -> String {
    CATEGORY_BREADCRUMB.prefix(&[])
}

pub fn categories_all(store_id: u32, customer_role_ids: &[u32], show_hidden: bool) -> String {
    CATEGORIES_ALL.key(&[&store_id, &id_list(customer_role_ids), &show_hidden])
}

pub fn categories_all_prefix() -> String {
    CATEGORIES_ALL.prefix(&[])
}

pub fn product_categories_by_category(
    category_id: u32,
    show_hidden: bool,
    page_index: u32,
    page_size: u32,
    customer_id: u32,
    store_id: u32,
) -> String {
    PRODUCT_CATEGORIES_BY_CATEGORY.key(&[
        &category_id,
        &show_hidden,
        &page_index,
        &page_size,
        &customer_id,
        &store_id,
    ])
}

pub fn product_categories_by_category_prefix(category_id: u32) -> String {
    PRODUCT_CATEGORIES_BY_CATEGORY.prefix(&[&category_id])
}

pub fn product_categories_by_product(
    product_id: u32,
    show_hidden: bool,
    customer_id: u32,
    store_id: u32,
) -> String {
    PRODUCT_CATEGORIES_BY_PRODUCT.key(&[&product_id, &show_hidden, &customer_id, &store_id])
}

pub fn product_categories_by_product_prefix(product_id: u32) -> String {
    PRODUCT_CATEGORIES_BY_PRODUCT.prefix(&[&product_id])
}

pub fn category_number_of_products(
    customer_role_ids: &[u32],
    store_id: u32,
    category_ids: &[u32],
) -> String {
    CATEGORY_NUMBER_OF_PRODUCTS.key(&[
        &ids_hash(customer_role_ids),
        &store_id,
        &ids_hash(category_ids),
    ])
}

pub fn category_number_of_products_prefix() -> String {
    CATEGORY_NUMBER_OF_PRODUCTS.prefix(&[])
}

// ============================================================================
// Manufacturers
// ============================================================================

/// {0} manufacturer id, {1} show hidden, {2} page index, {3} page size,
/// {4} customer id, {5} store id
pub const PRODUCT_MANUFACTURERS_BY_MANUFACTURER: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductManufacturersAllByManufacturerId",
    "storefront.productmanufacturer.allbymanufacturerid-{0}-{1}-{2}-{3}-{4}-{5}",
    "storefront.productmanufacturer.allbymanufacturerid-{0}",
);

/// {0} product id, {1} show hidden, {2} customer id, {3} store id
pub const PRODUCT_MANUFACTURERS_BY_PRODUCT: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductManufacturersAllByProductId",
    "storefront.productmanufacturer.allbyproductid-{0}-{1}-{2}-{3}",
    "storefront.productmanufacturer.allbyproductid-{0}",
);

pub fn product_manufacturers_by_manufacturer(
    manufacturer_id: u32,
    show_hidden: bool,
    page_index: u32,
    page_size: u32,
    customer_id: u32,
    store_id: u32,
) -> String {
    PRODUCT_MANUFACTURERS_BY_MANUFACTURER.key(&[
        &manufacturer_id,
        &show_hidden,
        &page_index,
        &page_size,
        &customer_id,
        &store_id,
    ])
}

pub fn product_manufacturers_by_manufacturer_prefix(manufacturer_id: u32) -> String {
    PRODUCT_MANUFACTURERS_BY_MANUFACTURER.prefix(&[&manufacturer_id])
}

pub fn product_manufacturers_by_product(
    product_id: u32,
    show_hidden: bool,
    customer_id: u32,
    store_id: u32,
) -> String {
    PRODUCT_MANUFACTURERS_BY_PRODUCT.key(&[&product_id, &show_hidden, &customer_id, &store_id])
}

pub fn product_manufacturers_by_product_prefix(product_id: u32) -> String {
    PRODUCT_MANUFACTURERS_BY_PRODUCT.prefix(&[&product_id])
}

// ============================================================================
// Products
// ============================================================================

/// {0} product id, {1} show hidden
pub const PRODUCTS_RELATED: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductsRelated",
    "storefront.product.related-{0}-{1}",
    "storefront.product.related-{0}",
);

/// {0} product id
pub const PRODUCT_TIER_PRICES: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductTierPrices",
    "storefront.product.tierprices-{0}",
    "storefront.product.tierprices-{0}",
);

pub const PRODUCTS_HOMEPAGE: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductsAllDisplayedOnHomepage",
    "storefront.product.homepage",
    "storefront.product.homepage",
);

/// {0} product ids hash
pub const PRODUCTS_BY_IDS: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductsByIds",
    "storefront.product.ids-{0}",
    "storefront.product.ids",
);

/// {0} product attribute id
pub const PRODUCTS_BY_PRODUCT_ATTRIBUTE: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductsByProductAttribute",
    "storefront.product.productattribute-{0}",
    "storefront.product.productattribute-{0}",
);

/// {0} product id, {1} overridden price, {2} additional charge,
/// {3} include discounts, {4} quantity, {5} customer roles, {6} store id
pub const PRODUCT_PRICE: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductPrice",
    "storefront.totals.productprice-{0}-{1}-{2}-{3}-{4}-{5}-{6}",
    "storefront.totals.productprice-{0}",
);

pub fn products_related(product_id: u32, show_hidden: bool) -> String {
    PRODUCTS_RELATED.key(&[&product_id, &show_hidden])
}

pub fn products_related_prefix(product_id: u32) -> String {
    PRODUCTS_RELATED.prefix(&[&product_id])
}

pub fn product_tier_prices(product_id: u32) -> String {
    PRODUCT_TIER_PRICES.key(&[&product_id])
}

pub fn products_homepage() -> String {
    PRODUCTS_HOMEPAGE.key(&[])
}

pub fn products_by_ids(product_ids: &[u32]) -> String {
    PRODUCTS_BY_IDS.key(&[&ids_hash(product_ids)])
}

pub fn products_by_ids_prefix() -> String {
    PRODUCTS_BY_IDS.prefix(&[])
}

pub fn products_by_product_attribute(product_attribute_id: u32) -> String {
    PRODUCTS_BY_PRODUCT_ATTRIBUTE.key(&[&product_attribute_id])
}

/// An absent overridden price renders as an empty segment.
pub fn product_price(
    product_id: u32,
    overridden_price: Option<f64>,
    additional_charge: f64,
    include_discounts: bool,
    quantity: u32,
    customer_role_ids: &[u32],
    store_id: u32,
) -> String {
    let overridden = overridden_price
        .map(|price| price.to_string())
        .unwrap_or_default();
    PRODUCT_PRICE.key(&[
        &product_id,
        &overridden,
        &additional_charge,
        &include_discounts,
        &quantity,
        &id_list(customer_role_ids),
        &store_id,
    ])
}

pub fn product_price_prefix(product_id: u32) -> String {
    PRODUCT_PRICE.prefix(&[&product_id])
}

// ============================================================================
// Product attributes
// ============================================================================

/// {0} page index, {1} page size
pub const PRODUCT_ATTRIBUTES_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductAttributesAll",
    "storefront.productattribute.all-{0}-{1}",
    "storefront.productattribute.all",
);

/// {0} product id
pub const PRODUCT_ATTRIBUTE_MAPPINGS_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductAttributeMappingsAll",
    "storefront.productattributemapping.all-{0}",
    "storefront.productattributemapping.",
);

/// {0} product attribute mapping id
pub const PRODUCT_ATTRIBUTE_VALUES_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductAttributeValuesAll",
    "storefront.productattributevalue.all-{0}",
    "storefront.productattributevalue.",
);

/// {0} product id
pub const PRODUCT_ATTRIBUTE_COMBINATIONS_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductAttributeCombinationsAll",
    "storefront.productattributecombination.all-{0}",
    "storefront.productattributecombination.",
);

/// {0} product attribute id
pub const PREDEFINED_PRODUCT_ATTRIBUTE_VALUES_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "PredefinedProductAttributeValuesAll",
    "storefront.predefinedproductattributevalues.all-{0}",
    "storefront.predefinedproductattributevalues.",
);

pub fn product_attributes_all(page_index: u32, page_size: u32) -> String {
    PRODUCT_ATTRIBUTES_ALL.key(&[&page_index, &page_size])
}

pub fn product_attribute_mappings_all(product_id: u32) -> String {
    PRODUCT_ATTRIBUTE_MAPPINGS_ALL.key(&[&product_id])
}

pub fn product_attribute_values_all(product_attribute_mapping_id: u32) -> String {
    PRODUCT_ATTRIBUTE_VALUES_ALL.key(&[&product_attribute_mapping_id])
}

pub fn product_attribute_combinations_all(product_id: u32) -> String {
    PRODUCT_ATTRIBUTE_COMBINATIONS_ALL.key(&[&product_id])
}

pub fn predefined_product_attribute_values_all(product_attribute_id: u32) -> String {
    PREDEFINED_PRODUCT_ATTRIBUTE_VALUES_ALL.key(&[&product_attribute_id])
}

// ============================================================================
// Product tags
// ============================================================================

pub const PRODUCT_TAG_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductTagAll",
    "storefront.producttag.all",
    "storefront.producttag.",
);

/// {0} store id, {1} customer roles hash, {2} show hidden
pub const PRODUCT_TAG_COUNT: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductTagCount",
    "storefront.producttag.all.count-{0}-{1}-{2}",
    "storefront.producttag.",
);

/// {0} product id
pub const PRODUCT_TAG_ALL_BY_PRODUCT: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductTagAllByProductId",
    "storefront.producttag.allbyproductid-{0}",
    "storefront.producttag.",
);

pub fn product_tag_all() -> String {
    PRODUCT_TAG_ALL.key(&[])
}

pub fn product_tag_count(store_id: u32, customer_role_ids: &[u32], show_hidden: bool) -> String {
    PRODUCT_TAG_COUNT.key(&[&store_id, &ids_hash(customer_role_ids), &show_hidden])
}

pub fn product_tag_all_by_product(product_id: u32) -> String {
    PRODUCT_TAG_ALL_BY_PRODUCT.key(&[&product_id])
}

pub fn product_tag_prefix() -> String {
    PRODUCT_TAG_ALL.prefix(&[])
}

// ============================================================================
// Review types
// ============================================================================

pub const REVIEW_TYPE_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ReviewTypeAll",
    "storefront.reviewtype.all",
    "storefront.reviewtype.",
);

/// {0} product review id
pub const PRODUCT_REVIEW_TYPE_MAPPING_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductReviewReviewTypeMappingAll",
    "storefront.productreviewreviewtypemapping.all-{0}",
    "storefront.productreviewreviewtypemapping.",
);

pub fn review_type_all() -> String {
    REVIEW_TYPE_ALL.key(&[])
}

pub fn product_review_type_mapping_all(product_review_id: u32) -> String {
    PRODUCT_REVIEW_TYPE_MAPPING_ALL.key(&[&product_review_id])
}

// ============================================================================
// Specification attributes
// ============================================================================

/// {0} product id, {1} specification attribute option id, {2} allow filtering,
/// {3} show on product page
pub const PRODUCT_SPECIFICATION_ATTRIBUTES_BY_PRODUCT: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductSpecificationAttributeAllByProductId",
    "storefront.productspecificationattribute.allbyproductid-{0}-{1}-{2}-{3}",
    "storefront.productspecificationattribute.allbyproductid-{0}",
);

pub const SPEC_ATTRIBUTES_WITH_OPTIONS: CacheKeyTemplate = CacheKeyTemplate::new(
    "SpecAttributesWithOptions",
    "storefront.productspecificationattribute.with.options",
    "storefront.productspecificationattribute.",
);

pub const SPEC_ATTRIBUTES_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "SpecAttributesAll",
    "storefront.productspecificationattribute.all",
    "storefront.productspecificationattribute.",
);

/// {0} specification attribute id
pub const SPEC_ATTRIBUTES_OPTIONS: CacheKeyTemplate = CacheKeyTemplate::new(
    "SpecAttributesOptions",
    "storefront.productspecificationattribute.options-{0}",
    "storefront.productspecificationattribute.",
);

/// `None` for the option id renders as `0`, matching "any option".
pub fn product_specification_attributes_by_product(
    product_id: u32,
    specification_attribute_option_id: Option<u32>,
    allow_filtering: Option<bool>,
    show_on_product_page: Option<bool>,
) -> String {
    let allow_filtering = allow_filtering.map(|v| v.to_string()).unwrap_or_default();
    let show_on_product_page = show_on_product_page
        .map(|v| v.to_string())
        .unwrap_or_default();
    PRODUCT_SPECIFICATION_ATTRIBUTES_BY_PRODUCT.key(&[
        &product_id,
        &specification_attribute_option_id.unwrap_or(0),
        &allow_filtering,
        &show_on_product_page,
    ])
}

pub fn product_specification_attributes_by_product_prefix(product_id: u32) -> String {
    PRODUCT_SPECIFICATION_ATTRIBUTES_BY_PRODUCT.prefix(&[&product_id])
}

pub fn spec_attributes_with_options() -> String {
    SPEC_ATTRIBUTES_WITH_OPTIONS.key(&[])
}

pub fn spec_attributes_all() -> String {
    SPEC_ATTRIBUTES_ALL.key(&[])
}

pub fn spec_attributes_options(specification_attribute_id: u32) -> String {
    SPEC_ATTRIBUTES_OPTIONS.key(&[&specification_attribute_id])
}

// ============================================================================
// Templates
// ============================================================================

pub const CATEGORY_TEMPLATES_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "CategoryTemplatesAll",
    "storefront.categorytemplate.all",
    "storefront.categorytemplate.",
);

pub const MANUFACTURER_TEMPLATES_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ManufacturerTemplatesAll",
    "storefront.manufacturertemplate.all",
    "storefront.manufacturertemplate.",
);

pub const PRODUCT_TEMPLATES_ALL: CacheKeyTemplate = CacheKeyTemplate::new(
    "ProductTemplatesAll",
    "storefront.producttemplates.all",
    "storefront.producttemplates.",
);

pub fn category_templates_all() -> String {
    CATEGORY_TEMPLATES_ALL.key(&[])
}

pub fn manufacturer_templates_all() -> String {
    MANUFACTURER_TEMPLATES_ALL.key(&[])
}

pub fn product_templates_all() -> String {
    PRODUCT_TEMPLATES_ALL.key(&[])
}

/// Every catalog template, grouped as above.
pub const ALL: &[CacheKeyTemplate] = &[
    CATEGORIES_BY_PARENT,
    CATEGORIES_CHILD_IDENTIFIERS,
    CATEGORIES_HOMEPAGE_ALL,
    CATEGORIES_HOMEPAGE_WITHOUT_HIDDEN,
    CATEGORY_BREADCRUMB,
    CATEGORIES_ALL,
    PRODUCT_CATEGORIES_BY_CATEGORY,
    PRODUCT_CATEGORIES_BY_PRODUCT,
    CATEGORY_NUMBER_OF_PRODUCTS,
    PRODUCT_MANUFACTURERS_BY_MANUFACTURER,
    PRODUCT_MANUFACTURERS_BY_PRODUCT,
    PRODUCTS_RELATED,
    PRODUCT_TIER_PRICES,
    PRODUCTS_HOMEPAGE,
    PRODUCTS_BY_IDS,
    PRODUCTS_BY_PRODUCT_ATTRIBUTE,
    PRODUCT_PRICE,
    PRODUCT_ATTRIBUTES_ALL,
    PRODUCT_ATTRIBUTE_MAPPINGS_ALL,
    PRODUCT_ATTRIBUTE_VALUES_ALL,
    PRODUCT_ATTRIBUTE_COMBINATIONS_ALL,
    PREDEFINED_PRODUCT_ATTRIBUTE_VALUES_ALL,
    PRODUCT_TAG_ALL,
    PRODUCT_TAG_COUNT,
    PRODUCT_TAG_ALL_BY_PRODUCT,
    REVIEW_TYPE_ALL,
    PRODUCT_REVIEW_TYPE_MAPPING_ALL,
    PRODUCT_SPECIFICATION_ATTRIBUTES_BY_PRODUCT,
    SPEC_ATTRIBUTES_WITH_OPTIONS,
    SPEC_ATTRIBUTES_ALL,
    SPEC_ATTRIBUTES_OPTIONS,
    CATEGORY_TEMPLATES_ALL,
    MANUFACTURER_TEMPLATES_ALL,
    PRODUCT_TEMPLATES_ALL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keys_follow_argument_order() {
        assert_eq!(
            categories_by_parent(5, false, 42, 1),
            "storefront.category.byparent-5-false-42-1"
        );
        assert_eq!(
            categories_child_identifiers(5, &[1, 3], 2, true),
            "storefront.category.childidentifiers-5-1,3-2-true"
        );
        assert_eq!(
            category_breadcrumb(9, &[1], 2, 3),
            "storefront.category.breadcrumb-9-1-2-3"
        );
        assert_eq!(categories_all(1, &[], false), "storefront.category.all-1--false");
    }

    #[test]
    fn prefixes_cover_their_keys() {
        assert!(categories_by_parent(5, true, 1, 1).starts_with(&categories_by_parent_prefix(5)));
        assert!(
            product_categories_by_category(3, false, 0, 20, 1, 1)
                .starts_with(&product_categories_by_category_prefix(3))
        );
        assert!(
            categories_homepage_without_hidden(1, &[2]).starts_with(&categories_homepage_prefix())
        );
        assert!(product_tag_count(1, &[1], false).starts_with(&product_tag_prefix()));
        assert!(
            product_specification_attributes_by_product(8, None, Some(true), None)
                .starts_with(&product_specification_attributes_by_product_prefix(8))
        );
    }

    #[test]
    fn hashed_arguments_are_order_independent() {
        assert_eq!(products_by_ids(&[3, 2, 1]), products_by_ids(&[1, 2, 3]));
        assert_eq!(
            category_number_of_products(&[2, 1], 1, &[10, 11]),
            category_number_of_products(&[1, 2], 1, &[11, 10])
        );
    }

    #[test]
    fn product_price_renders_optional_override() {
        assert_eq!(
            product_price(7, None, 0.0, true, 1, &[1, 2], 1),
            "storefront.totals.productprice-7--0-true-1-1,2-1"
        );
        assert_eq!(
            product_price(7, Some(19.5), 2.25, false, 3, &[1], 2),
            "storefront.totals.productprice-7-19.5-2.25-false-3-1-2"
        );
    }

    #[test]
    fn static_keys_have_no_placeholders() {
        assert_eq!(products_homepage(), "storefront.product.homepage");
        assert_eq!(spec_attributes_all(), "storefront.productspecificationattribute.all");
        assert_eq!(product_templates_all(), "storefront.producttemplates.all");
    }
}
