//! Column names, sentinel values and display labels of the price list dataset.

pub const DATE: &str = "Fecha";
pub const MERCHANT_NAME: &str = "Nombre del Comercio";
pub const MERCHANT_ADDRESS: &str = "Direccion del Comercio";
pub const MERCHANT_NEIGHBORHOOD: &str = "Vecindario del Comercio";
pub const MERCHANT_AREA: &str = "Area del Comercio";
pub const MERCHANT_POSTAL_CODE: &str = "Codigo Postal del Comercio";
pub const MERCHANT_CATEGORY: &str = "Categoria del Comercio";
pub const MERCHANT_PHONE: &str = "Telefono del Comercio";
pub const MERCHANT_WEBSITE: &str = "Web del Comercio";
pub const PRODUCT_DESCRIPTION: &str = "Descripcion del Producto";
pub const PRODUCT_SKU: &str = "SKU del Producto";
pub const PRODUCT_UOM: &str = "UoM del Producto";
pub const PRODUCT_CATEGORY: &str = "Categoria del Producto";
pub const UNIT_PRICE: &str = "Precio Unitario del Producto";
pub const TOTAL_QUANTITY: &str = "Cantidad Total";

/// Source row position, carried through cleaning like a dataframe index.
pub const ROW_INDEX: &str = "#";

/// Placeholder for missing text.
pub const MISSING: &str = "N/A";

/// Cell text read as missing, matching the usual dataframe NA markers.
pub const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Text columns whose missing values are replaced with [`MISSING`].
pub const NULLABLE_TEXT_COLUMNS: [&str; 12] = [
    DATE,
    MERCHANT_NAME,
    MERCHANT_ADDRESS,
    MERCHANT_NEIGHBORHOOD,
    MERCHANT_AREA,
    MERCHANT_POSTAL_CODE,
    MERCHANT_CATEGORY,
    MERCHANT_WEBSITE,
    PRODUCT_DESCRIPTION,
    PRODUCT_SKU,
    PRODUCT_UOM,
    PRODUCT_CATEGORY,
];

// KPI labels
pub const LABEL_CATEGORIES: &str = "Num. de Categorias";
pub const LABEL_STORES: &str = "Num. de Puntos de Venta";
pub const LABEL_PRODUCTS: &str = "Num. de Productos";
pub const LABEL_PRICES: &str = "Num. de Precios";

pub const DEFAULT_DATASET: &str = "Pricing_Data_Final.csv";
pub const DEFAULT_EXPORT_NAME: &str = "df.csv";
pub const DATASET_ENV: &str = "PRICE_DASHBOARD_CSV";
pub const CONFIG_FILE: &str = "dashboard.json";
