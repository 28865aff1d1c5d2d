// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use sales_capacity_analytics::domain::{
    Category, ConfidenceInterval, FiscalYear, ProductData, SalesDataPoint,
};

// ==========================================
// ProductData 构建器
// ==========================================

pub struct RowBuilder {
    product_id: String,
    name: String,
    category: Category,
    plant: String,
    area: String,
    data: Vec<SalesDataPoint>,
}

impl RowBuilder {
    pub fn new(product_id: &str, name: &str) -> Self {
        Self {
            product_id: product_id.to_string(),
            name: name.to_string(),
            category: Category::Electrification,
            plant: "plant-1".to_string(),
            area: "area-1".to_string(),
            data: Vec::new(),
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn plant(mut self, plant: &str) -> Self {
        self.plant = plant.to_string();
        self
    }

    pub fn area(mut self, area: &str) -> Self {
        self.area = area.to_string();
        self
    }

    pub fn historical(mut self, year: u8, sales: i64) -> Self {
        self.data.push(SalesDataPoint::historical(fy(year), sales));
        self
    }

    pub fn forecast(mut self, year: u8, sales: i64, lower: i64, upper: i64) -> Self {
        self.data.push(SalesDataPoint::forecast(
            fy(year),
            sales,
            ConfidenceInterval { lower, upper },
        ));
        self
    }

    /// 不带置信区间的预测点
    pub fn bare_forecast(mut self, year: u8, sales: i64) -> Self {
        let mut point = SalesDataPoint::historical(fy(year), sales);
        point.forecast = true;
        self.data.push(point);
        self
    }

    pub fn build(self) -> ProductData {
        ProductData {
            id: ProductData::row_key(&self.product_id, &self.plant, &self.area),
            product_id: self.product_id,
            name: self.name,
            category: self.category,
            plant: self.plant,
            area: self.area,
            data: self.data,
        }
    }
}

pub fn fy(year: u8) -> FiscalYear {
    FiscalYear::new(year).expect("财年必须为两位年份")
}
