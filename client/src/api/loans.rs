use serde_json::Value;

use common::models::req::{LoanQuery, LoanUpdate, NewLoan};
use common::models::{LoanPage, LoanProduct};
use common::AppResult;

use super::InsertResult;
use crate::http::ApiClient;

/// 贷款产品接口
#[derive(Clone)]
pub struct LoansApi {
    client: ApiClient,
}

impl LoansApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 列表（搜索/筛选/分页）
    pub async fn get_all(&self, query: &LoanQuery) -> AppResult<LoanPage> {
        self.client.get_with_query("/api/loans", query).await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<LoanProduct> {
        self.client.get(&format!("/api/loans/{}", id)).await
    }

    /// 新建产品（经理）
    pub async fn create(&self, loan: &NewLoan) -> AppResult<InsertResult> {
        self.client.post("/api/loans", loan).await
    }

    /// 部分更新（经理/管理员）
    pub async fn update(&self, id: &str, update: &LoanUpdate) -> AppResult<Value> {
        self.client.patch(&format!("/api/loans/{}", id), update).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<Value> {
        self.client.delete(&format!("/api/loans/{}", id)).await
    }

    /// 按经理 email 查询名下产品
    pub async fn get_by_manager(&self, email: &str, query: &LoanQuery) -> AppResult<Vec<LoanProduct>> {
        let path = format!("/api/loans/manager/{}", urlencoding::encode(email));
        self.client.get_with_query(&path, query).await
    }
}
